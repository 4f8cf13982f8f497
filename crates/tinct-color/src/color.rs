//! Immutable color values with consistent RGBA and HSVA views.
//!
//! A [`ColorValue`] is always constructed through one of two paths:
//!
//! - **RGBA** ([`ColorValue::from_rgba`]): the bytes are kept verbatim and
//!   the HSV channels are computed from them.
//! - **HSVA** ([`ColorValue::from_hsva`]): every channel is clamped to its
//!   legal range, then the RGB bytes are quantized from the clamped values.
//!
//! Every transform ([`ColorValue::shift_value`], [`ColorValue::with_saturation`],
//! ...) goes back through the HSVA path, so a derived color is bit-identical
//! to one built directly from the same HSV numbers.
//!
//! Equality, ordering, and hashing are defined on the canonical `#RRGGBBAA`
//! form. Two values that quantize to the same bytes are equal even when
//! their HSV channels differ in the low bits.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::FormatError;
use crate::named;

/// Maximum hue, in degrees.
pub const HUE_MAX: f64 = 360.0;

/// Maximum saturation and value, in percent.
pub const PERCENT_MAX: f64 = 100.0;

/// Immutable color with RGBA bytes and HSVA channels.
#[derive(Debug, Clone, Copy)]
pub struct ColorValue {
    h: f64,
    s: f64,
    v: f64,
    a: f64,
    r: u8,
    g: u8,
    b: u8,
}

impl ColorValue {
    /// Opaque black.
    pub const BLACK: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
        a: 1.0,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 100.0,
        a: 1.0,
        r: 255,
        g: 255,
        b: 255,
    };

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
        a: 0.0,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Build from RGB bytes and a fractional alpha in `[0, 1]`.
    #[must_use]
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let (h, s, v) = rgb_to_hsv(r, g, b);
        Self {
            h,
            s,
            v,
            a: clamp_channel(alpha, 1.0),
            r,
            g,
            b,
        }
    }

    /// Build an opaque color from RGB bytes.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Build from four bytes, scaling alpha from `[0, 255]` to `[0, 1]`.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(r, g, b, f64::from(a) / 255.0)
    }

    /// Build from HSVA channels, clamping each into range first.
    ///
    /// Hue is clamped to `[0, 360]` (not wrapped), saturation and value to
    /// `[0, 100]`, alpha to `[0, 1]`. NaN channels collapse to zero.
    #[must_use]
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        let h = clamp_channel(h, HUE_MAX);
        let s = clamp_channel(s, PERCENT_MAX);
        let v = clamp_channel(v, PERCENT_MAX);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self {
            h,
            s,
            v,
            a: clamp_channel(a, 1.0),
            r,
            g,
            b,
        }
    }

    /// Parse any supported textual notation.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)`, `hsv(h, s, v)`, `hsva(h, s, v, a)` and CSS color
    /// names. Anything else is a [`FormatError`] carrying the raw input.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let trimmed = input.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some((name, args)) = split_function(trimmed) {
            parse_function(name, args)
        } else {
            named::lookup(trimmed)
        };
        parsed.ok_or_else(|| FormatError::color(input))
    }

    pub fn hue(self) -> f64 {
        self.h
    }

    pub fn saturation(self) -> f64 {
        self.s
    }

    pub fn value(self) -> f64 {
        self.v
    }

    pub fn alpha(self) -> f64 {
        self.a
    }

    pub fn red(self) -> u8 {
        self.r
    }

    pub fn green(self) -> u8 {
        self.g
    }

    pub fn blue(self) -> u8 {
        self.b
    }

    /// Alpha scaled linearly to a byte.
    pub fn alpha_byte(self) -> u8 {
        quantize(self.a)
    }

    /// Whether the color is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.alpha_byte() == 0
    }

    /// Shift value (brightness) by `percent`, clamped, keeping H, S and A.
    #[must_use]
    pub fn shift_value(self, percent: f64) -> Self {
        self.with_value(self.v + percent)
    }

    #[must_use]
    pub fn with_value(self, value: f64) -> Self {
        Self::from_hsva(self.h, self.s, value, self.a)
    }

    #[must_use]
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self::from_hsva(self.h, saturation, self.v, self.a)
    }

    /// Reduce saturation by `amount` percentage points.
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.with_saturation(self.s - amount)
    }

    /// Replace alpha, keeping the RGB bytes untouched.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: clamp_channel(alpha, 1.0),
            ..self
        }
    }

    /// Canonical `#RRGGBBAA` form (uppercase).
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r,
            self.g,
            self.b,
            self.alpha_byte()
        )
    }

    /// CSS functional form, e.g. `rgba(51, 102, 153, 0.5)`.
    pub fn to_css(self) -> String {
        let alpha = (self.a * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    fn key(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha_byte()]
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ColorValue {}

impl Hash for ColorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ColorValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Fixed-width uppercase hex orders exactly like its bytes.
impl Ord for ColorValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ColorValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColorValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ColorValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ── Conversion ─────────────────────────────────────────────────────────

fn clamp_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

fn quantize(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let s = s / PERCENT_MAX;
    let v = v / PERCENT_MAX;
    let chroma = v * s;
    let sector = (h % HUE_MAX) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = v - chroma;
    (quantize(r + m), quantize(g + m), quantize(b + m))
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max * 100.0 };
    (h, s, max * 100.0)
}

// ── Parsing ────────────────────────────────────────────────────────────

fn parse_hex(hex: &str) -> Option<ColorValue> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(ColorValue::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(ColorValue::from_rgba8(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            nibble(3)?,
        )),
        6 => Some(ColorValue::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(ColorValue::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn split_function(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let inner = text[open + 1..].strip_suffix(')')?;
    Some((text[..open].trim(), inner))
}

fn parse_function(name: &str, args: &str) -> Option<ColorValue> {
    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("rgb", [r, g, b]) => Some(ColorValue::rgb(parse_byte(r)?, parse_byte(g)?, parse_byte(b)?)),
        ("rgba", [r, g, b, a]) => Some(ColorValue::from_rgba(
            parse_byte(r)?,
            parse_byte(g)?,
            parse_byte(b)?,
            parse_number(a)?,
        )),
        ("hsv", [h, s, v]) => Some(ColorValue::from_hsva(
            parse_number(h)?,
            parse_percent(s)?,
            parse_percent(v)?,
            1.0,
        )),
        ("hsva", [h, s, v, a]) => Some(ColorValue::from_hsva(
            parse_number(h)?,
            parse_percent(s)?,
            parse_percent(v)?,
            parse_number(a)?,
        )),
        _ => None,
    }
}

/// Unsigned decimal channel in `[0, 255]`; no sign allowed.
fn parse_byte(text: &str) -> Option<u8> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_percent(text: &str) -> Option<f64> {
    parse_number(text.strip_suffix('%').unwrap_or(text).trim_end())
}
