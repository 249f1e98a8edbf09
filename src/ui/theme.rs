// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers for glass surfaces.

use crate::effects::blur::BlurCurve;
use crate::ui::design_tokens::opacity;
use iced::Color;

/// Maps a frost intensity (in notional blur px) to the surface alpha used
/// when rendering a glass panel.
///
/// `min_px` maps to [`opacity::FROST_FLOOR`], `max_px` to
/// [`opacity::FROST_CEIL`], linearly in between.
#[must_use]
pub fn frost_alpha(frost_px: f32, curve: &BlurCurve) -> f32 {
    let span = curve.max_px - curve.min_px;
    if span <= 0.0 {
        return opacity::FROST_CEIL;
    }
    let factor = ((frost_px - curve.min_px) / span).clamp(0.0, 1.0);
    opacity::FROST_FLOOR + factor * (opacity::FROST_CEIL - opacity::FROST_FLOOR)
}

/// Scales a color's alpha, leaving the channels untouched.
///
/// Used to apply entrance and fade-out opacity to surfaces and text.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn frost_alpha_spans_floor_to_ceil() {
        let curve = BlurCurve::default();
        assert_abs_diff_eq!(
            frost_alpha(curve.min_px, &curve),
            opacity::FROST_FLOOR,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            frost_alpha(curve.max_px, &curve),
            opacity::FROST_CEIL,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn frost_alpha_is_monotonic() {
        let curve = BlurCurve::default();
        let mut last = 0.0;
        for px in [5.0, 7.5, 10.0, 12.5, 15.0] {
            let alpha = frost_alpha(px, &curve);
            assert!(alpha >= last);
            last = alpha;
        }
    }

    #[test]
    fn degenerate_curve_pins_to_ceil() {
        let flat = BlurCurve {
            min_px: 8.0,
            max_px: 8.0,
            scroll_range_px: 500.0,
        };
        assert_eq!(frost_alpha(8.0, &flat), opacity::FROST_CEIL);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.8);
        let out = faded(color, 0.5);
        assert_abs_diff_eq!(out.a, 0.4, epsilon = F32_EPSILON);
        assert_eq!(out.r, color.r);
        assert_eq!(out.g, color.g);
        assert_eq!(out.b, color.b);
    }

    #[test]
    fn faded_clamps_wild_factors() {
        let color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
        assert_eq!(faded(color, 2.0).a, 1.0);
        assert_eq!(faded(color, -1.0).a, 0.0);
    }
}
