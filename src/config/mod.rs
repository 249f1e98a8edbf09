// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Targeting of glass surfaces is configured here as well: instead of matching
//! elements by name, effects are switched per [`SurfaceRole`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_gloss::config::{self, Config, SurfaceRole};
//!
//! // Load existing configuration
//! let config = config::load().unwrap_or_default();
//!
//! // Check whether scroll-driven blur applies to the nav bar
//! let frosted_nav = config.surface_enabled(SurfaceRole::NavBar);
//! ```

use crate::effects::blur::BlurCurve;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod preset;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGloss";

/// Glass surfaces that scroll-driven blur can target.
///
/// The set of roles is closed; a role is either frosted or left flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRole {
    Card,
    NavBar,
}

/// Per-role enable flags for the blur adjuster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurfaceToggles {
    #[serde(default = "enabled")]
    pub cards: bool,
    #[serde(default = "enabled")]
    pub nav_bar: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SurfaceToggles {
    fn default() -> Self {
        Self {
            cards: true,
            nav_bar: true,
        }
    }
}

/// Optional overrides for the scroll-blur curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BlurOverrides {
    pub min_px: Option<f32>,
    pub max_px: Option<f32>,
    pub scroll_range_px: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Initial theme mode; the in-session toggle never writes this back.
    pub theme_mode: Option<ThemeMode>,
    #[serde(default)]
    pub blur: Option<BlurOverrides>,
    #[serde(default)]
    pub surfaces: Option<SurfaceToggles>,
}

impl Config {
    /// Resolves the blur curve, applying any configured overrides to the defaults.
    #[must_use]
    pub fn blur_curve(&self) -> BlurCurve {
        let overrides = self.blur.unwrap_or_default();
        let mut curve = BlurCurve::default();
        if let Some(min) = overrides.min_px {
            curve.min_px = min;
        }
        if let Some(max) = overrides.max_px {
            curve.max_px = max;
        }
        if let Some(range) = overrides.scroll_range_px {
            curve.scroll_range_px = range;
        }
        curve
    }

    /// Returns whether the blur adjuster targets the given surface role.
    #[must_use]
    pub fn surface_enabled(&self, role: SurfaceRole) -> bool {
        let toggles = self.surfaces.unwrap_or_default();
        match role {
            SurfaceRole::Card => toggles.cards,
            SurfaceRole::NavBar => toggles.nav_bar,
        }
    }
}

/// Platform config directory for this application.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
