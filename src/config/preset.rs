// SPDX-License-Identifier: MPL-2.0
//! Embedded glass preset and its on-disk materialization.
//!
//! The preset plays the role of a stylesheet: it defines the glow colors used
//! by hovered cards. A default copy ships inside the binary and is written to
//! the config directory on first run, guarded by an existence check so user
//! edits are never clobbered.

use crate::error::{Error, Result};
use iced::Color;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/presets/"]
struct PresetAssets;

/// File name of the preset, both embedded and on disk.
pub const PRESET_FILE: &str = "glass.toml";

/// Glow colors applied to a hovered card.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Glow {
    /// Broad shadow cast under the card.
    pub ambient: [f32; 3],
    pub ambient_alpha: f32,
    /// Tight halo hugging the card edge.
    pub halo: [f32; 3],
    pub halo_alpha: f32,
}

impl Glow {
    #[must_use]
    pub fn ambient_color(&self) -> Color {
        let [r, g, b] = self.ambient;
        Color::from_rgba(r, g, b, self.ambient_alpha)
    }

    #[must_use]
    pub fn halo_color(&self) -> Color {
        let [r, g, b] = self.halo;
        Color::from_rgba(r, g, b, self.halo_alpha)
    }
}

/// Parsed glass preset.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GlassPreset {
    pub glow: Glow,
}

impl Default for GlassPreset {
    fn default() -> Self {
        Self {
            glow: Glow {
                ambient: [0.031, 0.286, 0.804],
                ambient_alpha: 0.3,
                halo: [0.353, 0.58, 1.0],
                halo_alpha: 0.2,
            },
        }
    }
}

/// Writes the embedded preset into `dir` if no copy exists yet.
///
/// Calling this twice is a no-op the second time; an existing file is left
/// untouched, whatever its contents. Returns the path of the preset file.
pub fn ensure_at(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(PRESET_FILE);
    if !path.exists() {
        fs::create_dir_all(dir)?;
        let asset = PresetAssets::get(PRESET_FILE)
            .ok_or_else(|| Error::Config(format!("embedded preset {PRESET_FILE} missing")))?;
        fs::write(&path, asset.data.as_ref())?;
    }
    Ok(path)
}

/// Loads a preset, falling back to the defaults when the file does not parse.
pub fn load_from_path(path: &Path) -> Result<GlassPreset> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Materializes the preset under the platform config dir and loads it.
pub fn ensure_and_load() -> Result<GlassPreset> {
    match super::config_dir() {
        Some(dir) => {
            let path = ensure_at(&dir)?;
            load_from_path(&path)
        }
        None => Ok(GlassPreset::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn embedded_preset_parses_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = ensure_at(dir.path()).expect("failed to materialize preset");

        let preset = load_from_path(&path).expect("failed to load preset");
        assert_eq!(preset, GlassPreset::default());
    }

    #[test]
    fn ensure_twice_writes_a_single_file() {
        let dir = tempdir().expect("failed to create temp dir");

        let first = ensure_at(dir.path()).expect("first materialization failed");
        let contents = fs::read_to_string(&first).expect("failed to read preset");

        let second = ensure_at(dir.path()).expect("second materialization failed");
        assert_eq!(first, second);
        assert_eq!(
            fs::read_to_string(&second).expect("failed to re-read preset"),
            contents
        );
        assert_eq!(fs::read_dir(dir.path()).expect("read_dir failed").count(), 1);
    }

    #[test]
    fn ensure_preserves_user_edits() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(PRESET_FILE);
        fs::write(&path, "# my preset\n[glow]\nambient = [1.0, 0.0, 0.0]\nambient_alpha = 1.0\nhalo = [0.0, 1.0, 0.0]\nhalo_alpha = 0.5\n")
            .expect("failed to seed preset");

        ensure_at(dir.path()).expect("materialization failed");
        let preset = load_from_path(&path).expect("failed to load preset");
        assert_eq!(preset.glow.ambient, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn unparseable_preset_falls_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(PRESET_FILE);
        fs::write(&path, "not a preset at all").expect("failed to write file");

        let preset = load_from_path(&path).expect("load should not error");
        assert_eq!(preset, GlassPreset::default());
    }

    #[test]
    fn glow_colors_carry_their_alphas() {
        let glow = GlassPreset::default().glow;
        assert_eq!(glow.ambient_color().a, 0.3);
        assert_eq!(glow.halo_color().a, 0.2);
    }
}
