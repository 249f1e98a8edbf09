// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven card tilt.
//!
//! Moving the pointer across a card rotates it around both axes, proportional
//! to the cursor's offset from the card center and capped at
//! [`MAX_TILT_DEGREES`]. When the pointer leaves, the card eases back to
//! neutral over [`TILT_RESET_MS`]; re-entering cancels the pending ease.

use crate::config::defaults::{MAX_TILT_DEGREES, TILT_RESET_MS};
use crate::effects::stagger::ease_out_cubic;
use iced::{Point, Size};
use std::time::{Duration, Instant};

/// Rotation applied to a card, in degrees.
///
/// `x` rotates around the horizontal axis (positive tips the top edge away),
/// `y` around the vertical axis (positive tips the right edge away).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Rotation for a pointer at `at` inside a card of the given size.
    ///
    /// The center maps to neutral; the corners reach the full
    /// [`MAX_TILT_DEGREES`] on both axes. Positions outside the bounds are
    /// clamped to the edge values.
    #[must_use]
    pub fn for_pointer(at: Point, size: Size) -> Self {
        let center_x = size.width / 2.0;
        let center_y = size.height / 2.0;
        if center_x <= 0.0 || center_y <= 0.0 {
            return Self::NEUTRAL;
        }

        let dx = ((at.x - center_x) / center_x).clamp(-1.0, 1.0);
        let dy = ((at.y - center_y) / center_y).clamp(-1.0, 1.0);

        Self {
            x: -dy * MAX_TILT_DEGREES,
            y: dx * MAX_TILT_DEGREES,
        }
    }

    fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Reset {
    from: Tilt,
    since: Instant,
}

/// Per-card tilt state.
///
/// Each card owns one of these; cards never share tilt state.
#[derive(Debug, Clone, Default)]
pub struct TiltState {
    rotation: Tilt,
    hovered: bool,
    reset: Option<Reset>,
}

impl TiltState {
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_moved(&mut self, at: Point, size: Size) {
        self.reset = None;
        self.rotation = Tilt::for_pointer(at, size);
    }

    /// Drops the glow and starts easing the rotation back to neutral.
    pub fn pointer_exited(&mut self, now: Instant) {
        self.hovered = false;
        if self.rotation != Tilt::NEUTRAL {
            self.reset = Some(Reset {
                from: self.rotation,
                since: now,
            });
        }
        self.rotation = Tilt::NEUTRAL;
    }

    /// Rotation to render at `now`, interpolating any pending reset ease.
    #[must_use]
    pub fn sampled(&self, now: Instant) -> Tilt {
        match self.reset {
            Some(reset) => {
                let window = Duration::from_millis(TILT_RESET_MS).as_secs_f32();
                let elapsed = now.saturating_duration_since(reset.since).as_secs_f32();
                let progress = (elapsed / window).clamp(0.0, 1.0);
                reset.from.scaled(1.0 - ease_out_cubic(progress))
            }
            None => self.rotation,
        }
    }

    /// Retires a finished reset ease.
    pub fn tick(&mut self, now: Instant) {
        if let Some(reset) = self.reset {
            if now.saturating_duration_since(reset.since) >= Duration::from_millis(TILT_RESET_MS) {
                self.reset = None;
            }
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_easing(&self) -> bool {
        self.reset.is_some()
    }
}
