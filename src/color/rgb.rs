use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Represents a 24-bit RGB color, one byte per channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("string {input:?} is an invalid RGB hex code")]
pub struct DecodeError {
    input: String,
}

impl DecodeError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for Rgb {
    /// Renders the historical wire form `#0xRR0xGG0xBB`: every channel
    /// carries its own `0x` prefix. Not the usual `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#0x{:02X}0x{:02X}0x{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = DecodeError;

    /// Accepts six contiguous hex digits, optionally preceded by characters
    /// that are not hex digits (a `#` prefix, typically). Anything after the
    /// sixth digit is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let start = bytes
            .iter()
            .position(|b| b.is_ascii_hexdigit())
            .ok_or_else(|| DecodeError::new(s))?;
        let digits = &bytes[start..];
        if digits.len() < 6 || !digits[..6].iter().all(u8::is_ascii_hexdigit) {
            return Err(DecodeError::new(s));
        }

        // The six-digit window is all ASCII, so these slices stay on char
        // boundaries.
        let channel = |offset: usize| -> Result<u8, DecodeError> {
            let pair = &s[start + offset..start + offset + 2];
            u8::from_str_radix(pair, 16).map_err(|_| DecodeError::new(s))
        };

        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}
