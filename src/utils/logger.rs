use crate::shared::constants;
use lazy_static::lazy_static;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static! {
    static ref LOG_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

/// Arms the debug log. A no-op unless the HI256_DEBUG environment variable
/// is set; stdout and stderr belong to the output contract and are never
/// written here.
pub fn init() {
    if std::env::var(constants::DEBUG_ENV).is_err() {
        return;
    }

    let mut path = std::env::current_dir().unwrap_or_default();
    path.push(constants::DEBUG_LOG_FILE);

    append_line(
        &path,
        &format!(
            "=== {} debug log started: {} ===",
            constants::APP_NAME,
            chrono::Local::now()
        ),
    );

    *LOG_PATH.lock().unwrap() = Some(path);
}

pub fn log(level: &str, msg: &str) {
    if let Some(path) = LOG_PATH.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        append_line(path, &format!("[{}][{}] {}", timestamp, level, msg));
    }
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}
