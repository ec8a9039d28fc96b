//! Color families and concrete background colors.
//!
//! Content records carry a symbolic theme tag rather than a pixel value.
//! Tags are matched by family token, so `blue`, `bg-blue-50` and
//! `from-blue-200` all resolve to [`ColorTheme::Blue`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static TAG_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-]+").expect("valid tag separator regex"));

/// Symbolic accent family of one content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    /// Slate and any unrecognized tag.
    Neutral,
}

impl ColorTheme {
    const PRECEDENCE: [ColorTheme; 5] = [
        ColorTheme::Blue,
        ColorTheme::Purple,
        ColorTheme::Green,
        ColorTheme::Orange,
        ColorTheme::Red,
    ];

    /// Resolves a theme tag to its family.
    ///
    /// When a tag mentions several families the first one in
    /// blue → purple → green → orange → red order wins.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        let found = TAG_SEPARATOR_RE
            .split(&normalized)
            .filter_map(Self::from_family_name)
            .collect::<Vec<_>>();
        Self::PRECEDENCE
            .into_iter()
            .find(|family| found.contains(family))
            .unwrap_or(Self::Neutral)
    }

    fn from_family_name(name: &str) -> Option<Self> {
        match name {
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "green" => Some(Self::Green),
            "orange" => Some(Self::Orange),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (leading `#` optional).
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
