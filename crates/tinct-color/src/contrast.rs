//! WCAG relative luminance, contrast ratio, and minimum-contrast search.
//!
//! [`ensure_minimum_contrast`] adjusts a foreground color until it reaches a
//! target ratio against a background, in two phases:
//!
//! 1. **Value rail**: hold hue and saturation, step value one unit at a time
//!    away from the background (darker on light surfaces, lighter on dark
//!    ones) until the target is met or value hits its bound.
//! 2. **Desaturation walk**: when the rail is exhausted, step saturation
//!    toward 0 and value toward whichever pole (black or white) contrasts
//!    more with the background, one unit per step.
//!
//! Steps are whole HSV units routed through [`ColorValue::from_hsva`], so
//! every candidate is quantized exactly like a directly constructed color.
//! The search never fails: an unreachable target yields the best candidate
//! seen with `meets_minimum == false`.

use crate::color::ColorValue;

/// WCAG AA minimum for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// WCAG AA minimum for large text and non-text UI components.
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

/// WCAG AAA minimum for normal text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;

/// Surfaces at or above this value count as light.
pub const LIGHT_SURFACE_VALUE: f64 = 50.0;

/// Outcome of [`ensure_minimum_contrast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    /// The adjusted (or untouched) foreground.
    pub color: ColorValue,
    /// Contrast of `color` against the background.
    pub ratio: f64,
    /// Whether `ratio` reached the requested minimum.
    pub meets_minimum: bool,
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`; alpha is ignored.
pub fn relative_luminance(color: ColorValue) -> f64 {
    let r = srgb_to_linear(f64::from(color.red()) / 255.0);
    let g = srgb_to_linear(f64::from(color.green()) / 255.0);
    let b = srgb_to_linear(f64::from(color.blue()) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in `[1, 21]`, symmetric in its arguments.
pub fn contrast_ratio(a: ColorValue, b: ColorValue) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_wcag_aa(fg: ColorValue, bg: ColorValue) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

pub fn meets_wcag_aaa(fg: ColorValue, bg: ColorValue) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AAA_NORMAL_TEXT
}

/// Pick the candidate with the highest contrast against `bg`.
///
/// Ties keep the earliest candidate. Returns `None` for an empty slice.
pub fn best_text_color(bg: ColorValue, candidates: &[ColorValue]) -> Option<ColorValue> {
    let (&first, rest) = candidates.split_first()?;
    let mut best = first;
    let mut best_ratio = contrast_ratio(best, bg);
    for &candidate in rest {
        let ratio = contrast_ratio(candidate, bg);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    Some(best)
}

/// Adjust `fg` until it reaches `minimum` contrast against `bg`.
///
/// Returns `fg` unchanged when it already passes.
pub fn ensure_minimum_contrast(fg: ColorValue, bg: ColorValue, minimum: f64) -> ContrastResult {
    let initial = contrast_ratio(fg, bg);
    let mut best = ContrastResult {
        color: fg,
        ratio: initial,
        meets_minimum: initial >= minimum,
    };
    if best.meets_minimum {
        return best;
    }

    if search_value_rail(&mut best, fg, bg, minimum) {
        tracing::trace!(
            message = "contrast.value_rail",
            ratio = best.ratio,
            value = best.color.value()
        );
        return best;
    }

    if search_desaturation(&mut best, fg, bg, minimum) {
        tracing::trace!(
            message = "contrast.desaturation",
            ratio = best.ratio,
            saturation = best.color.saturation(),
            value = best.color.value()
        );
        return best;
    }

    tracing::debug!(
        message = "contrast.unreachable",
        foreground = %fg,
        background = %bg,
        minimum,
        best_ratio = best.ratio
    );
    best
}

/// Record `candidate` if it beats `best`; report whether it meets `minimum`.
fn consider(best: &mut ContrastResult, candidate: ColorValue, bg: ColorValue, minimum: f64) -> bool {
    let ratio = contrast_ratio(candidate, bg);
    if ratio > best.ratio {
        *best = ContrastResult {
            color: candidate,
            ratio,
            meets_minimum: ratio >= minimum,
        };
    }
    ratio >= minimum
}

fn search_value_rail(
    best: &mut ContrastResult,
    fg: ColorValue,
    bg: ColorValue,
    minimum: f64,
) -> bool {
    let direction = if bg.value() >= LIGHT_SURFACE_VALUE {
        -1.0
    } else {
        1.0
    };
    let mut step = 1.0;
    loop {
        let candidate = fg.with_value(fg.value() + direction * step);
        if consider(best, candidate, bg, minimum) {
            return true;
        }
        if candidate.value() <= 0.0 || candidate.value() >= 100.0 {
            return false;
        }
        step += 1.0;
    }
}

fn search_desaturation(
    best: &mut ContrastResult,
    fg: ColorValue,
    bg: ColorValue,
    minimum: f64,
) -> bool {
    // Pole by contrast ratio, not luminance distance: the walk then ends on
    // the best achievable color.
    let pole = if contrast_ratio(ColorValue::WHITE, bg) >= contrast_ratio(ColorValue::BLACK, bg) {
        100.0
    } else {
        0.0
    };
    let (s0, v0) = (fg.saturation(), fg.value());
    let steps = s0.max((pole - v0).abs()).ceil() as u32;
    for step in 1..=steps {
        let k = f64::from(step);
        let s = (s0 - k).max(0.0);
        let v = if pole > v0 {
            (v0 + k).min(pole)
        } else {
            (v0 - k).max(pole)
        };
        let candidate = ColorValue::from_hsva(fg.hue(), s, v, fg.alpha());
        if consider(best, candidate, bg, minimum) {
            return true;
        }
    }
    false
}
