//! Opaque style values carried by theme updates.
//!
//! The core only looks inside a value when it is a color. Lengths and
//! keywords are rendered to CSS text unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinct_color::{ColorValue, FormatError};

/// CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Pt,
    Percent,
}

impl LengthUnit {
    const SUFFIXES: [(&'static str, Self); 5] = [
        ("px", Self::Px),
        ("rem", Self::Rem),
        ("em", Self::Em),
        ("pt", Self::Pt),
        ("%", Self::Percent),
    ];

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Pt => "pt",
            Self::Percent => "%",
        }
    }
}

/// A CSS length such as `8px` or `1.5rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn rem(value: f64) -> Self {
        Self::new(value, LengthUnit::Rem)
    }

    /// Parse `<number><unit>`. A bare `0` is accepted as `0px`.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        if trimmed == "0" {
            return Ok(Self::px(0.0));
        }
        // `rem` must be tried before `em`.
        LengthUnit::SUFFIXES
            .iter()
            .find_map(|&(suffix, unit)| {
                let number = trimmed.strip_suffix(suffix)?;
                let value = number.parse::<f64>().ok().filter(|v| v.is_finite())?;
                Some(Self::new(value, unit))
            })
            .ok_or_else(|| FormatError::new("length", input))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Value attached to a theme update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StyleValue {
    Color(ColorValue),
    Length(Length),
    /// Already-validated keyword text (font family, weight, line style, ...).
    Keyword(String),
    /// Several values rendered space-separated (e.g. padding shorthand).
    Group(Vec<StyleValue>),
}

impl StyleValue {
    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    pub fn as_color(&self) -> Option<ColorValue> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Render as a CSS value string.
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(color) => color.to_css(),
            Self::Length(length) => length.to_string(),
            Self::Keyword(text) => text.clone(),
            Self::Group(values) => values
                .iter()
                .map(Self::to_css)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<ColorValue> for StyleValue {
    fn from(color: ColorValue) -> Self {
        Self::Color(color)
    }
}

impl From<Length> for StyleValue {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}
