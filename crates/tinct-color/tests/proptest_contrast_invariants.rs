//! Property-based invariant tests for color conversion and contrast search.
//!
//! 1. RGB bytes survive a round trip through HSV
//! 2. HSV construction always lands in range
//! 3. Contrast ratio is symmetric and within [1, 21]
//! 4. ensure_minimum_contrast never does worse than min(target, best pole)
//! 5. A passing foreground is returned untouched
//! 6. shift_value is bit-identical to direct HSV construction

use proptest::prelude::*;
use tinct_color::{ColorValue, contrast_ratio, ensure_minimum_contrast, relative_luminance};

// ── Strategies ──────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = ColorValue> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| ColorValue::rgb(r, g, b))
}

fn hsv_strategy() -> impl Strategy<Value = ColorValue> {
    (0.0f64..=360.0, 0.0f64..=100.0, 0.0f64..=100.0, 0.0f64..=1.0)
        .prop_map(|(h, s, v, a)| ColorValue::from_hsva(h, s, v, a))
}

fn target_strategy() -> impl Strategy<Value = f64> {
    1.0f64..=21.0
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Conversion
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rgb_round_trips_through_hsv(color in rgb_strategy()) {
        let rebuilt = ColorValue::from_hsva(
            color.hue(),
            color.saturation(),
            color.value(),
            color.alpha(),
        );
        prop_assert_eq!(rebuilt.to_hex(), color.to_hex());
    }

    #[test]
    fn hsv_construction_clamps(
        h in -1000.0f64..1000.0,
        s in -500.0f64..500.0,
        v in -500.0f64..500.0,
        a in -5.0f64..5.0,
    ) {
        let color = ColorValue::from_hsva(h, s, v, a);
        prop_assert!((0.0..=360.0).contains(&color.hue()));
        prop_assert!((0.0..=100.0).contains(&color.saturation()));
        prop_assert!((0.0..=100.0).contains(&color.value()));
        prop_assert!((0.0..=1.0).contains(&color.alpha()));
    }

    #[test]
    fn canonical_hex_parses_back(color in hsv_strategy()) {
        let parsed = ColorValue::parse(&color.to_hex()).unwrap();
        prop_assert_eq!(parsed, color);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Contrast ratio
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_is_symmetric_and_bounded(a in rgb_strategy(), b in rgb_strategy()) {
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        prop_assert_eq!(ab, ba);
        prop_assert!(ab >= 1.0 - 1e-12);
        prop_assert!(ab <= 21.0 + 1e-9);
    }

    #[test]
    fn luminance_in_unit_range(color in rgb_strategy()) {
        let lum = relative_luminance(color);
        prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. ensure_minimum_contrast
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn search_reaches_target_or_best_pole(
        fg in hsv_strategy(),
        bg in rgb_strategy(),
        target in target_strategy(),
    ) {
        let result = ensure_minimum_contrast(fg, bg, target);
        let best_pole = contrast_ratio(ColorValue::BLACK, bg)
            .max(contrast_ratio(ColorValue::WHITE, bg));
        prop_assert!(result.ratio >= target.min(best_pole) - 1e-9,
            "ratio {} target {} pole {}", result.ratio, target, best_pole);
        prop_assert_eq!(result.ratio, contrast_ratio(result.color, bg));
        prop_assert_eq!(result.meets_minimum, result.ratio >= target);
    }

    #[test]
    fn passing_foreground_is_untouched(
        fg in hsv_strategy(),
        bg in rgb_strategy(),
        frac in 0.0f64..=1.0,
    ) {
        let ratio = contrast_ratio(fg, bg);
        let target = (1.0 + (ratio - 1.0) * frac).min(ratio);
        let result = ensure_minimum_contrast(fg, bg, target);
        prop_assert!(result.meets_minimum);
        prop_assert_eq!(result.color.to_hex(), fg.to_hex());
        prop_assert_eq!(result.color.value(), fg.value());
    }

    #[test]
    fn search_preserves_alpha(
        fg in hsv_strategy(),
        bg in rgb_strategy(),
        target in target_strategy(),
    ) {
        let result = ensure_minimum_contrast(fg, bg, target);
        prop_assert_eq!(result.color.alpha(), fg.alpha());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. shift_value
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shift_value_is_bit_exact(base in hsv_strategy(), delta in -30i32..=30) {
        let delta = f64::from(delta);
        let shifted = base.shift_value(delta);
        let direct = ColorValue::from_hsva(
            base.hue(),
            base.saturation(),
            base.value() + delta,
            base.alpha(),
        );
        prop_assert_eq!(shifted.to_hex(), direct.to_hex());
        prop_assert_eq!(shifted.hue(), base.hue());
        prop_assert_eq!(shifted.saturation(), base.saturation());
    }
}
