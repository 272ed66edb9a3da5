//! Screen configuration.
//!
//! The two values the embedding context passes to the chat screen: the
//! header title and the header color.

use std::str::FromStr;

use thiserror::Error;

/// Default header title when the embedder passes none.
pub const DEFAULT_TITLE: &str = "Chat Title";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Color literal did not parse.
    #[error("invalid color literal {0:?}: expected \"#RRGGBB\"")]
    InvalidColor(String),
}

/// Header bar color as an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Default for HeaderColor {
    /// The stock blue, `#3498db`.
    fn default() -> Self {
        Self { r: 0x34, g: 0x98, b: 0xdb }
    }
}

impl FromStr for HeaderColor {
    type Err = ConfigError;

    /// Parse a `#RRGGBB` literal. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ConfigError::InvalidColor(s.to_owned()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ConfigError::InvalidColor(s.to_owned()))
        };

        Ok(Self { r: channel(0..2)?, g: channel(2..4)?, b: channel(4..6)? })
    }
}

/// Configuration for one mounted chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Header title text.
    pub title: String,
    /// Header bar color.
    pub header_color: HeaderColor,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { title: DEFAULT_TITLE.to_owned(), header_color: HeaderColor::default() }
    }
}
