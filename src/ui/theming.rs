// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and the toggle state machine.

use crate::config::defaults::TOGGLE_PULSE_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub backdrop: Color,
    pub surface: Color,
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand color
    pub accent: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            backdrop: palette::GRAY_100,
            surface: palette::WHITE,
            surface_raised: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            accent: palette::PRIMARY_600,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            backdrop: Color::from_rgb(0.04, 0.05, 0.08),
            surface: palette::GRAY_900,
            surface_raised: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            accent: palette::PRIMARY_400,
        }
    }
}

/// Initial theme mode, as configured or passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Two-state theme toggle with a decorative press pulse.
///
/// The pulse is a deadline rather than a timer: re-toggling within the window
/// re-arms it, and nothing fires after the state is dropped.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    dark: bool,
    pulse_until: Option<Instant>,
}

impl ThemeToggle {
    /// Builds the toggle from an initial mode, resolving System once.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            dark: mode.is_dark(),
            pulse_until: None,
        }
    }

    /// Flips the theme and arms the press pulse.
    pub fn toggle(&mut self, now: Instant) {
        self.dark = !self.dark;
        self.pulse_until = Some(now + Duration::from_millis(TOGGLE_PULSE_MS));
    }

    /// Clears an elapsed pulse deadline.
    pub fn tick(&mut self, now: Instant) {
        if self.pulse_until.is_some_and(|until| now >= until) {
            self.pulse_until = None;
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn pulse_active(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// The color scheme for the current state.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        if self.dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// The Iced theme for the current state.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9); // Close to white
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2); // Close to black
    }

    #[test]
    fn both_schemes_keep_the_accent_blue() {
        assert!(ColorScheme::light().accent.b > ColorScheme::light().accent.r);
        assert!(ColorScheme::dark().accent.b > ColorScheme::dark().accent.r);
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeToggle::default().is_dark());
    }

    #[test]
    fn theme_mode_parses_from_cli_values() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn toggling_twice_restores_the_initial_state() {
        let mut toggle = ThemeToggle::new(ThemeMode::Dark);
        let initial_scheme = toggle.scheme();

        let now = Instant::now();
        toggle.toggle(now);
        assert!(!toggle.is_dark());
        assert_ne!(toggle.scheme(), initial_scheme);

        toggle.toggle(now);
        assert!(toggle.is_dark());
        assert_eq!(toggle.scheme(), initial_scheme);
    }

    #[test]
    fn pulse_is_armed_by_a_toggle_and_drained_by_ticks() {
        let now = Instant::now();
        let mut toggle = ThemeToggle::new(ThemeMode::Dark);
        assert!(!toggle.pulse_active(now));

        toggle.toggle(now);
        assert!(toggle.pulse_active(now));
        assert!(toggle.pulse_active(now + Duration::from_millis(499)));

        // A tick inside the window keeps the pulse alive.
        toggle.tick(now + Duration::from_millis(400));
        assert!(toggle.pulse_active(now + Duration::from_millis(450)));

        // A tick past the deadline clears it.
        toggle.tick(now + Duration::from_millis(TOGGLE_PULSE_MS));
        assert!(!toggle.pulse_active(now + Duration::from_millis(TOGGLE_PULSE_MS)));
    }

    #[test]
    fn re_toggling_re_arms_the_pulse_instead_of_stacking() {
        let now = Instant::now();
        let mut toggle = ThemeToggle::new(ThemeMode::Dark);

        toggle.toggle(now);
        toggle.toggle(now + Duration::from_millis(300));

        // The first deadline (now + 500ms) is gone; only the re-armed one counts.
        assert!(toggle.pulse_active(now + Duration::from_millis(700)));
        toggle.tick(now + Duration::from_millis(800));
        assert!(!toggle.pulse_active(now + Duration::from_millis(800)));
    }

    #[test]
    fn system_mode_resolves_without_panicking() {
        let _ = ThemeMode::System.is_dark();
    }
}
