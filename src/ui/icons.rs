// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached with `OnceLock` so repeated views reuse the same allocation.
//! The glyphs are stroke-based and render in `currentColor`, so they can be
//! tinted per theme with [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(moon, "moon.svg", "Crescent shown while the dark theme is active.");
define_icon!(sun, "sun.svg", "Sun shown while the light theme is active.");
define_icon!(cross, "cross.svg", "Cross used by the toast dismiss affordance.");
define_icon!(check, "check.svg", "Checkmark accenting success toasts.");
define_icon!(warning, "warning.svg", "Triangle accenting warning toasts.");
define_icon!(alert, "alert.svg", "Alert circle accenting error toasts.");

/// Constrains an icon to a square of the given side.
pub fn sized(icon: Svg<'static>, side: f32) -> Svg<'static> {
    icon.width(Length::Fixed(side)).height(Length::Fixed(side))
}

/// Tints a stroke-based icon with a flat color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::{palette, sizing};

    #[test]
    fn all_icons_are_constructible() {
        let _ = moon();
        let _ = sun();
        let _ = cross();
        let _ = check();
        let _ = warning();
        let _ = alert();
    }

    #[test]
    fn sizing_and_tinting_compose() {
        let _ = tinted(sized(moon(), sizing::ICON_MD), palette::PRIMARY_400);
    }
}
