pub const APP_NAME: &str = "hi256";

pub const DEFAULT_TAG: &str = "Example";

/// Background value that keeps the :hi shape but leaves guibg/ctermbg out.
pub const TRANSPARENT_BG: &str = "transparent";

pub const DEBUG_ENV: &str = "HI256_DEBUG";
pub const DEBUG_LOG_FILE: &str = "hi256-debug.log";
