//! Palette variants and per-state derivations.
//!
//! A [`PaletteVariant`] is a (background, foreground, border) triple. Every
//! derivation is a pure function of the base palette, the numeric deltas,
//! and a contrast target:
//!
//! - **Directional** (hovered, focused, pressed, dragged): shift background
//!   and border value away from the surface (darker on light surfaces,
//!   lighter on dark ones), then re-ensure foreground contrast.
//! - **Elevation** (high, highest, low, lowest): shift value away from
//!   mid-gray to raise, toward it to recede; border moves by the background
//!   delta plus a fixed offset.
//! - **Disabled**: desaturate and blend value toward mid-gray, then
//!   re-ensure foreground contrast at a relaxed target.
//!
//! All value shifts go through [`ColorValue::shift_value`], so derived
//! colors are bit-identical to colors built directly from the same HSV.

use serde::{Deserialize, Serialize};
use tinct_color::{
    ColorValue, LIGHT_SURFACE_VALUE, WCAG_AA_LARGE_TEXT, WCAG_AA_NORMAL_TEXT,
    WCAG_AAA_NORMAL_TEXT, ensure_minimum_contrast,
};

use crate::config::{DeriveConfig, StateDelta};
use crate::tags::{InteractionState, StyleProperty};

/// Value that disabled colors blend toward.
pub const MID_VALUE: f64 = 50.0;

/// Coordinated colors for one surface in one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteVariant {
    background: ColorValue,
    foreground: ColorValue,
    border: ColorValue,
}

impl PaletteVariant {
    /// Build a palette, contrast-adjusting against an opaque background.
    ///
    /// Foreground is brought to WCAG AA for text (4.5) and border to the
    /// non-text minimum (3.0). A transparent background leaves both as given.
    pub fn new(background: ColorValue, foreground: ColorValue, border: ColorValue) -> Self {
        if background.is_transparent() {
            return Self::from_raw(background, foreground, border);
        }
        Self {
            background,
            foreground: ensure_minimum_contrast(foreground, background, WCAG_AA_NORMAL_TEXT).color,
            border: ensure_minimum_contrast(border, background, WCAG_AA_LARGE_TEXT).color,
        }
    }

    /// Build a palette exactly as given, without contrast adjustment.
    pub const fn from_raw(background: ColorValue, foreground: ColorValue, border: ColorValue) -> Self {
        Self {
            background,
            foreground,
            border,
        }
    }

    pub const fn background(&self) -> ColorValue {
        self.background
    }

    pub const fn foreground(&self) -> ColorValue {
        self.foreground
    }

    pub const fn border(&self) -> ColorValue {
        self.border
    }

    /// The color a palette-color channel draws from this palette.
    pub const fn channel(&self, channel: ColorChannel) -> ColorValue {
        match channel {
            ColorChannel::Background => self.background,
            ColorChannel::Border | ColorChannel::Outline => self.border,
            ColorChannel::Foreground
            | ColorChannel::Accent
            | ColorChannel::Caret
            | ColorChannel::TextDecoration => self.foreground,
        }
    }

    /// High-contrast counterpart: foreground at AAA, border at AA.
    #[must_use]
    pub fn high_contrast(&self) -> Self {
        Self::from_raw(
            self.background,
            ensure_minimum_contrast(self.foreground, self.background, WCAG_AAA_NORMAL_TEXT).color,
            ensure_minimum_contrast(self.border, self.background, WCAG_AA_NORMAL_TEXT).color,
        )
    }
}

/// A color-valued style property a palette can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorChannel {
    Background,
    Accent,
    Border,
    Caret,
    Foreground,
    TextDecoration,
    Outline,
}

impl ColorChannel {
    pub const ALL: [Self; 7] = [
        Self::Background,
        Self::Accent,
        Self::Border,
        Self::Caret,
        Self::Foreground,
        Self::TextDecoration,
        Self::Outline,
    ];

    pub const fn property(self) -> StyleProperty {
        match self {
            Self::Background => StyleProperty::BackgroundColor,
            Self::Accent => StyleProperty::AccentColor,
            Self::Border => StyleProperty::BorderColor,
            Self::Caret => StyleProperty::CaretColor,
            Self::Foreground => StyleProperty::ForegroundColor,
            Self::TextDecoration => StyleProperty::TextDecorationColor,
            Self::Outline => StyleProperty::OutlineColor,
        }
    }
}

/// Elevation relative to the base surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Elevation {
    Lowest,
    Low,
    High,
    Highest,
}

impl Elevation {
    /// Signed value delta: positive raises, negative recedes.
    pub fn delta(self, config: &DeriveConfig) -> f64 {
        match self {
            Self::Highest => config.highest,
            Self::High => config.high,
            Self::Low => -config.high,
            Self::Lowest => -config.highest,
        }
    }
}

/// Direction a state shift moves value: darker on light surfaces.
pub fn state_direction(background: ColorValue) -> f64 {
    if background.value() >= LIGHT_SURFACE_VALUE {
        -1.0
    } else {
        1.0
    }
}

// ── Derivations ─────────────────────────────────────────────────────────

/// Shift background and border toward the state direction.
pub fn derive_directional(
    base: &PaletteVariant,
    background_delta: f64,
    border_delta: f64,
    minimum: f64,
) -> PaletteVariant {
    let direction = state_direction(base.background);
    let background = base.background.shift_value(direction * background_delta);
    let border = base.border.shift_value(direction * border_delta);
    let foreground = ensure_minimum_contrast(base.foreground, background, minimum).color;
    PaletteVariant::from_raw(background, foreground, border)
}

/// Raise (positive `delta`) or recede (negative) a palette.
///
/// Raising moves value away from mid-gray: lighter on light surfaces,
/// darker on dark ones.
pub fn derive_elevation(
    base: &PaletteVariant,
    delta: f64,
    border_delta: f64,
    minimum: f64,
) -> PaletteVariant {
    let direction = -state_direction(base.background);
    let background = base.background.shift_value(direction * delta);
    let border = base.border.shift_value(direction * border_delta);
    let foreground = ensure_minimum_contrast(base.foreground, background, minimum).color;
    PaletteVariant::from_raw(background, foreground, border)
}

/// Desaturate and blend background and border value toward [`MID_VALUE`].
pub fn derive_disabled(
    base: &PaletteVariant,
    desaturation: f64,
    blend: f64,
    minimum: f64,
) -> PaletteVariant {
    let fade = |color: ColorValue| {
        let value = color.value() + (MID_VALUE - color.value()) * blend;
        ColorValue::from_hsva(
            color.hue(),
            color.saturation() - desaturation,
            value,
            color.alpha(),
        )
    };
    let background = fade(base.background);
    let border = fade(base.border);
    let foreground = ensure_minimum_contrast(base.foreground, background, minimum).color;
    PaletteVariant::from_raw(background, foreground, border)
}

/// Applies [`DeriveConfig`] constants to the derivation functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteDeriver {
    config: DeriveConfig,
}

impl PaletteDeriver {
    pub const fn new(config: DeriveConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &DeriveConfig {
        &self.config
    }

    /// Palette for `state`, derived from the base (default-state) palette.
    ///
    /// Default and Visited use the base unchanged, as do Hidden and
    /// ReadOnly, which are never styled directly.
    pub fn derive(&self, base: &PaletteVariant, state: InteractionState) -> PaletteVariant {
        let directional = |delta: StateDelta| {
            derive_directional(base, delta.background, delta.border, self.config.min_contrast)
        };
        match state {
            InteractionState::Default
            | InteractionState::Visited
            | InteractionState::Hidden
            | InteractionState::ReadOnly => *base,
            InteractionState::Hovered => directional(self.config.hovered),
            InteractionState::Focused => directional(self.config.focused),
            InteractionState::Pressed => directional(self.config.pressed),
            InteractionState::Dragged => directional(self.config.dragged),
            InteractionState::Disabled => derive_disabled(
                base,
                self.config.disabled_desaturation,
                self.config.disabled_blend,
                self.config.disabled_min_contrast,
            ),
        }
    }

    pub fn elevate(&self, base: &PaletteVariant, elevation: Elevation) -> PaletteVariant {
        let delta = elevation.delta(&self.config);
        let border_delta = delta + delta.signum() * self.config.border_offset;
        derive_elevation(base, delta, border_delta, self.config.min_contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_color::contrast_ratio;

    fn light_base() -> PaletteVariant {
        PaletteVariant::from_raw(
            ColorValue::from_hsva(210.0, 20.0, 96.0, 1.0),
            ColorValue::from_hsva(210.0, 30.0, 15.0, 1.0),
            ColorValue::from_hsva(210.0, 20.0, 70.0, 1.0),
        )
    }

    fn dark_base() -> PaletteVariant {
        PaletteVariant::from_raw(
            ColorValue::from_hsva(230.0, 15.0, 12.0, 1.0),
            ColorValue::from_hsva(230.0, 10.0, 90.0, 1.0),
            ColorValue::from_hsva(230.0, 15.0, 35.0, 1.0),
        )
    }

    #[test]
    fn new_adjusts_foreground_and_border() {
        let bg = ColorValue::from_hsva(0.0, 0.0, 95.0, 1.0);
        let palette = PaletteVariant::new(
            bg,
            ColorValue::from_hsva(0.0, 0.0, 80.0, 1.0),
            ColorValue::from_hsva(0.0, 0.0, 90.0, 1.0),
        );
        assert!(contrast_ratio(palette.foreground(), bg) >= 4.5);
        assert!(contrast_ratio(palette.border(), bg) >= 3.0);
    }

    #[test]
    fn new_leaves_transparent_background_alone() {
        let fg = ColorValue::from_hsva(0.0, 0.0, 1.0, 1.0);
        let palette = PaletteVariant::new(ColorValue::TRANSPARENT, fg, fg);
        assert_eq!(palette, PaletteVariant::from_raw(ColorValue::TRANSPARENT, fg, fg));
    }

    #[test]
    fn hovered_on_light_surface_darkens_bit_exactly() {
        let base = light_base();
        let hovered = PaletteDeriver::default().derive(&base, InteractionState::Hovered);
        assert_eq!(hovered.background(), ColorValue::from_hsva(210.0, 20.0, 90.0, 1.0));
        assert_eq!(hovered.border(), ColorValue::from_hsva(210.0, 20.0, 62.0, 1.0));
        assert_eq!(hovered.background().value(), 90.0);
        assert_eq!(hovered.border().value(), 62.0);
    }

    #[test]
    fn pressed_on_dark_surface_lightens() {
        let base = dark_base();
        let pressed = PaletteDeriver::default().derive(&base, InteractionState::Pressed);
        assert_eq!(pressed.background().value(), 24.0);
        assert_eq!(pressed.border().value(), 49.0);
        assert!(contrast_ratio(pressed.foreground(), pressed.background()) >= 4.5);
    }

    #[test]
    fn state_deltas_grow_with_intensity() {
        let base = light_base();
        let deriver = PaletteDeriver::default();
        let values: Vec<f64> = [
            InteractionState::Hovered,
            InteractionState::Focused,
            InteractionState::Pressed,
            InteractionState::Dragged,
        ]
        .into_iter()
        .map(|state| deriver.derive(&base, state).background().value())
        .collect();
        assert_eq!(values, [90.0, 88.0, 84.0, 80.0]);
    }

    #[test]
    fn passthrough_states_return_base() {
        let base = light_base();
        let deriver = PaletteDeriver::default();
        for state in [
            InteractionState::Default,
            InteractionState::Visited,
            InteractionState::Hidden,
            InteractionState::ReadOnly,
        ] {
            assert_eq!(deriver.derive(&base, state), base);
        }
    }

    #[test]
    fn disabled_desaturates_and_blends_toward_mid() {
        let base = PaletteVariant::from_raw(
            ColorValue::from_hsva(120.0, 80.0, 90.0, 1.0),
            ColorValue::from_hsva(120.0, 80.0, 20.0, 1.0),
            ColorValue::from_hsva(120.0, 70.0, 10.0, 1.0),
        );
        let disabled = derive_disabled(&base, 60.0, 0.15, 3.0);
        assert_eq!(disabled.background(), ColorValue::from_hsva(120.0, 20.0, 84.0, 1.0));
        assert_eq!(disabled.border(), ColorValue::from_hsva(120.0, 10.0, 16.0, 1.0));
        assert!(contrast_ratio(disabled.foreground(), disabled.background()) >= 3.0 - 1e-9);
    }

    #[test]
    fn disabled_uses_relaxed_contrast() {
        // A foreground that passes 3.0 but not 4.5 is left untouched.
        let bg = ColorValue::from_hsva(0.0, 0.0, 100.0, 1.0);
        let fg = ColorValue::rgb(0x80, 0x80, 0x80);
        let base = PaletteVariant::from_raw(bg, fg, fg);
        let disabled = PaletteDeriver::default().derive(&base, InteractionState::Disabled);
        let ratio = contrast_ratio(fg, disabled.background());
        assert!((3.0..4.5).contains(&ratio), "ratio {ratio}");
        assert_eq!(disabled.foreground(), fg);
    }

    #[test]
    fn elevation_moves_away_from_mid_gray() {
        let deriver = PaletteDeriver::default();

        let dark = dark_base();
        let high = deriver.elevate(&dark, Elevation::High);
        assert_eq!(high.background().value(), 4.0);
        assert_eq!(high.border().value(), 25.0);
        let low = deriver.elevate(&dark, Elevation::Low);
        assert_eq!(low.background().value(), 20.0);
        assert_eq!(low.border().value(), 45.0);

        let light = light_base();
        let highest = deriver.elevate(&light, Elevation::Highest);
        assert_eq!(highest.background().value(), 100.0);
        assert_eq!(highest.border().value(), 84.0);
        let lowest = deriver.elevate(&light, Elevation::Lowest);
        assert_eq!(lowest.background().value(), 84.0);
        assert_eq!(lowest.border().value(), 56.0);
    }

    #[test]
    fn high_contrast_reaches_aaa_foreground() {
        let base = light_base();
        let hc = base.high_contrast();
        assert_eq!(hc.background(), base.background());
        assert!(contrast_ratio(hc.foreground(), hc.background()) >= 7.0);
        assert!(contrast_ratio(hc.border(), hc.background()) >= 4.5);
    }

    #[test]
    fn channels_map_to_palette_slots() {
        let base = light_base();
        assert_eq!(base.channel(ColorChannel::Background), base.background());
        assert_eq!(base.channel(ColorChannel::Outline), base.border());
        assert_eq!(base.channel(ColorChannel::Caret), base.foreground());
        let properties: Vec<StyleProperty> =
            ColorChannel::ALL.iter().map(|c| c.property()).collect();
        assert!(properties.iter().all(|p| p.is_color()));
        assert_eq!(properties.len(), 7);
    }

    #[test]
    fn derivations_are_deterministic() {
        let base = dark_base();
        let deriver = PaletteDeriver::default();
        for &state in InteractionState::ALL {
            assert_eq!(deriver.derive(&base, state), deriver.derive(&base, state));
        }
    }
}
