// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions for glass surfaces and controls.

use crate::config::preset::Glow;
use crate::effects::tilt::Tilt;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Vector};

/// How far the glow shadow slides per degree of tilt.
const GLOW_TILT_SHIFT: f32 = 0.8;

/// Frosted panel style for full-width surfaces (the nav bar).
///
/// `surface_alpha` comes from the frost mapping; `fade` is the entrance
/// opacity of the surface.
#[must_use]
pub fn glass_panel(scheme: ColorScheme, surface_alpha: f32, fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: surface_alpha,
                ..scheme.surface
            },
            fade,
        ))),
        border: Border {
            color: faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
                fade,
            ),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(faded(scheme.text_primary, fade)),
        ..Default::default()
    }
}

/// Frosted card style with tilt-aware glow.
///
/// While hovered, the card carries the preset's glow: the ambient color is
/// cast as a drop shadow whose offset follows the tilt, and the halo color
/// outlines the card. Unhovered cards keep a subtle border and shadow.
#[must_use]
pub fn glass_card(
    scheme: ColorScheme,
    surface_alpha: f32,
    entrance: f32,
    tilt: Tilt,
    glow: Option<Glow>,
) -> container::Style {
    let (card_shadow, border_color, border_width) = match glow {
        Some(glow) => (
            Shadow {
                color: faded(glow.ambient_color(), entrance),
                offset: Vector::new(
                    -tilt.y * GLOW_TILT_SHIFT,
                    shadow::GLOW_DROP + tilt.x * GLOW_TILT_SHIFT,
                ),
                blur_radius: shadow::GLOW_BLUR,
            },
            faded(glow.halo_color(), entrance),
            border::WIDTH_MD,
        ),
        None => (
            shadow::SM,
            faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
                entrance,
            ),
            border::WIDTH_SM,
        ),
    };

    container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: surface_alpha,
                ..scheme.surface
            },
            entrance,
        ))),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::LG.into(),
        },
        shadow: card_shadow,
        text_color: Some(faded(scheme.text_primary, entrance)),
        ..Default::default()
    }
}

/// Round theme toggle button; pulses with an accent ring after a press.
#[must_use]
pub fn toggle_button(scheme: ColorScheme, pulsing: bool, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.surface_raised,
        button::Status::Active | button::Status::Disabled => scheme.surface,
    };

    let (ring_color, ring_width, ring_shadow) = if pulsing {
        (
            scheme.accent,
            border::WIDTH_MD,
            Shadow {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..scheme.accent
                },
                offset: Vector::ZERO,
                blur_radius: shadow::GLOW_BLUR / 2.0,
            },
        )
    } else {
        (
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            border::WIDTH_SM,
            shadow::NONE,
        )
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.text_primary,
        border: Border {
            color: ring_color,
            width: ring_width,
            radius: radius::FULL.into(),
        },
        shadow: ring_shadow,
        ..Default::default()
    }
}

/// Pill button carrying a flat accent, used by the demo controls.
#[must_use]
pub fn accent_button(scheme: ColorScheme, accent: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active | button::Status::Disabled => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        },
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        },
        button::Status::Pressed => Color {
            a: opacity::OVERLAY_STRONG,
            ..accent
        },
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: scheme.text_primary,
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}
