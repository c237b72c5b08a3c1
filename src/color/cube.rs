use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;

use super::Rgb;

/// Quantizes one channel onto the six-step cube axis:
/// `floor((channel / 255) * 5)`, truncating toward zero.
fn level(channel: u8) -> u8 {
    ((channel as f64 / 255.0) * 5.0) as u8
}

/// Maps a color onto the xterm 6x6x6 color cube, palette indices 16-231.
///
/// The grayscale ramp (232-255) and the 16 base colors are unreachable by
/// this mapping.
pub fn cube_index(colour: Rgb) -> u8 {
    16 + level(colour.0) * 36 + level(colour.1) * 6 + level(colour.2)
}

/// Foreground escape for a palette index, immediately followed by a reset:
/// `\x1b[38;5;<index>m\x1b[0m`.
pub fn escape_sequence(index: u8) -> String {
    let mut sequence = String::new();
    // fmt::Write on a String cannot fail
    let _ = SetForegroundColor(Color::AnsiValue(index)).write_ansi(&mut sequence);
    let _ = ResetColor.write_ansi(&mut sequence);
    sequence
}
