// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the startup sequence and the exported utility surface.

use iced_gloss::config::defaults::{DEFAULT_NOTIFICATION_MS, NOTIFICATION_FADE_MS};
use iced_gloss::config::preset;
use iced_gloss::config::{self, Config};
use iced_gloss::ui::loading::{Panel, Spinners};
use iced_gloss::ui::notifications::{Manager, Notification, Severity};
use iced_gloss::ui::theming::{ThemeMode, ThemeToggle};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn theme_mode_flows_from_config_into_the_toggle() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: light
    let initial = Config {
        theme_mode: Some(ThemeMode::Light),
        ..Config::default()
    };
    config::save_to_path(&initial, &config_path).expect("failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert!(!ThemeToggle::new(loaded.theme_mode.unwrap()).is_dark());

    // 2. Change config to dark
    let dark = Config {
        theme_mode: Some(ThemeMode::Dark),
        ..Config::default()
    };
    config::save_to_path(&dark, &config_path).expect("failed to write dark config");

    let reloaded = config::load_from_path(&config_path).expect("failed to reload config");
    assert!(ThemeToggle::new(reloaded.theme_mode.unwrap()).is_dark());
}

#[test]
fn startup_materializes_the_preset_exactly_once() {
    let dir = tempdir().expect("failed to create temporary directory");

    // Running the guarded step twice must not rewrite or duplicate the preset.
    let path = preset::ensure_at(dir.path()).expect("first run failed");
    let contents = std::fs::read_to_string(&path).expect("failed to read preset");

    let again = preset::ensure_at(dir.path()).expect("second run failed");
    assert_eq!(path, again);
    assert_eq!(
        std::fs::read_to_string(&again).expect("failed to re-read preset"),
        contents
    );

    let preset = preset::load_from_path(&path).expect("failed to load preset");
    assert_eq!(preset, preset::GlassPreset::default());
}

#[test]
fn default_notification_lives_for_duration_plus_fade() {
    let mut manager = Manager::new();
    let notification = Notification::success("saved");
    let t0 = notification.created_at();
    manager.push(notification);

    // Exactly one success toast right after the push.
    assert_eq!(manager.visible_count(), 1);
    assert_eq!(
        manager.visible().next().map(Notification::severity),
        Some(Severity::Success)
    );

    // Still present one tick before duration + fade has elapsed...
    let lifetime = Duration::from_millis(DEFAULT_NOTIFICATION_MS + NOTIFICATION_FADE_MS);
    manager.tick(t0 + lifetime - Duration::from_millis(1));
    assert_eq!(manager.visible_count(), 1);

    // ...and gone right after.
    manager.tick(t0 + lifetime);
    assert_eq!(manager.visible_count(), 0);
    assert!(!manager.has_notifications());
}

#[test]
fn explicit_dismissal_uses_the_same_fade_window() {
    let mut manager = Manager::new();
    let notification = Notification::error("broken");
    let id = notification.id();
    let t0 = notification.created_at();
    manager.push(notification);

    assert!(manager.dismiss(id, t0));
    manager.tick(t0 + Duration::from_millis(NOTIFICATION_FADE_MS - 1));
    assert_eq!(manager.visible_count(), 1);
    manager.tick(t0 + Duration::from_millis(NOTIFICATION_FADE_MS));
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn spinner_toggle_round_trip_restores_the_registry() {
    let mut spinners = Spinners::new();
    let before = spinners.live_count();

    spinners.toggle(Panel::Card(2), true);
    spinners.toggle(Panel::Card(2), false);

    assert_eq!(spinners.live_count(), before);
}
