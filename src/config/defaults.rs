// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all effect and timing constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Blur**: scroll-driven frost intensity bounds
//! - **Tilt**: pointer-driven card rotation limits
//! - **Stagger**: entrance animation scheduling
//! - **Notifications**: toast display and fade timing
//! - **Ticking**: animation tick cadence

// ==========================================================================
// Blur Defaults
// ==========================================================================

/// Frost intensity applied when the content is not scrolled (logical px).
pub const MIN_BLUR_PX: f32 = 5.0;

/// Frost intensity applied once the content is fully scrolled (logical px).
pub const MAX_BLUR_PX: f32 = 15.0;

/// Scroll distance over which frost intensity ramps from min to max.
pub const BLUR_SCROLL_RANGE_PX: f32 = 500.0;

// ==========================================================================
// Tilt Defaults
// ==========================================================================

/// Maximum card rotation on either axis, in degrees.
pub const MAX_TILT_DEGREES: f32 = 10.0;

/// Time for a card to ease back to neutral after the pointer leaves.
pub const TILT_RESET_MS: u64 = 500;

// ==========================================================================
// Stagger / Entrance Defaults
// ==========================================================================

/// Delay between consecutive cards' entrance animations.
pub const STAGGER_STEP_MS: u64 = 100;

/// Duration of a single entrance fade.
pub const ENTRANCE_FADE_MS: u64 = 500;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays fully visible before fading out.
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

/// Fade-out time between dismissal (explicit or elapsed) and removal.
pub const NOTIFICATION_FADE_MS: u64 = 300;

/// Maximum number of toasts visible at once; the rest are queued.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Theme Toggle Defaults
// ==========================================================================

/// Length of the decorative pulse after the theme toggle is pressed.
pub const TOGGLE_PULSE_MS: u64 = 500;

// ==========================================================================
// Ticking Defaults
// ==========================================================================

/// Animation tick cadence while any animation is pending.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Spinner rotation advance per tick, in radians.
pub const SPINNER_STEP_RADIANS: f32 = 0.55;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Blur validation
    assert!(MIN_BLUR_PX > 0.0);
    assert!(MAX_BLUR_PX > MIN_BLUR_PX);
    assert!(BLUR_SCROLL_RANGE_PX > 0.0);

    // Tilt validation
    assert!(MAX_TILT_DEGREES > 0.0);
    assert!(TILT_RESET_MS > 0);

    // Stagger validation
    assert!(STAGGER_STEP_MS > 0);
    assert!(ENTRANCE_FADE_MS > 0);

    // Notification validation
    assert!(NOTIFICATION_FADE_MS > 0);
    assert!(DEFAULT_NOTIFICATION_MS > NOTIFICATION_FADE_MS);
    assert!(MAX_VISIBLE_TOASTS > 0);

    // Ticking validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS < NOTIFICATION_FADE_MS);
    assert!(SPINNER_STEP_RADIANS > 0.0);
};
