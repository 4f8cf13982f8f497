#![forbid(unsafe_code)]

//! Color values and WCAG contrast search for Tinct.
//!
//! # Role in Tinct
//! `tinct-color` is the leaf of the workspace. It knows nothing about themes,
//! components, or interaction states; `tinct-theme` builds palettes and
//! override rules on top of the primitives here.
//!
//! # This crate provides
//! - [`ColorValue`]: an immutable color with RGBA and HSVA views, parsed
//!   from hex, `rgb()/rgba()`, `hsv()/hsva()` or a CSS color name.
//! - [`contrast`]: relative luminance, contrast ratio, and
//!   [`ensure_minimum_contrast`], the best-effort search every palette
//!   derivation relies on.
//! - [`named`]: the CSS named-color table.
//! - [`FormatError`]: the error for text that matches no known grammar.

/// Color value type and its textual notations.
pub mod color;
/// WCAG luminance, contrast, and minimum-contrast search.
pub mod contrast;
/// Parse errors.
pub mod error;
/// CSS named colors.
pub mod named;

pub use color::ColorValue;
pub use contrast::{
    ContrastResult, LIGHT_SURFACE_VALUE, WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_NORMAL_TEXT, best_text_color, contrast_ratio, ensure_minimum_contrast,
    meets_wcag_aa, meets_wcag_aaa, relative_luminance,
};
pub use error::FormatError;
