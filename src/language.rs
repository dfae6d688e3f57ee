//! Language detection by Unicode block

use crate::{DispatchError, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// Devanagari block
const DEVANAGARI: RangeInclusive<u32> = 0x0900..=0x097F;

/// Culture tag used to pick a voice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Culture {
    /// en-US
    English,
    /// hi-IN
    Hindi,
}

impl Culture {
    /// Locale tag, e.g. `hi-IN`
    pub fn tag(self) -> &'static str {
        match self {
            Culture::English => "en-US",
            Culture::Hindi => "hi-IN",
        }
    }

    /// Parse a locale tag. Only `en-US` and `hi-IN` are accepted.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "en-US" => Ok(Culture::English),
            "hi-IN" => Ok(Culture::Hindi),
            other => Err(DispatchError::UnsupportedCulture(other.to_string())),
        }
    }

    /// Two-letter language code (espeak voice name)
    pub fn language_code(self) -> &'static str {
        match self {
            Culture::English => "en",
            Culture::Hindi => "hi",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Detect the culture of `text`
///
/// Any Devanagari code point makes the whole text Hindi; everything else
/// is treated as English.
pub fn detect_culture(text: &str) -> Culture {
    if text.chars().any(|ch| DEVANAGARI.contains(&(ch as u32))) {
        Culture::Hindi
    } else {
        Culture::English
    }
}
