// SPDX-License-Identifier: MPL-2.0
//! Entrance staggering and fade curves.
//!
//! Cards enter one after another: card `k` starts fading in `k` stagger steps
//! after launch and ramps from transparent to opaque over
//! [`ENTRANCE_FADE_MS`] with an ease-out. Headings reuse the same fade with
//! no offset.

use crate::config::defaults::{ENTRANCE_FADE_MS, STAGGER_STEP_MS};
use std::time::Duration;

/// Ease-out cubic, clamped to the unit interval.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Entrance delay for the element at `index`.
#[must_use]
pub fn delay_for(index: usize) -> Duration {
    Duration::from_millis(STAGGER_STEP_MS * index as u64)
}

/// Entrance opacity of element `index` after `elapsed` time since launch.
///
/// Zero until the element's staggered start, then an ease-out ramp to one.
#[must_use]
pub fn entrance_opacity(index: usize, elapsed: Duration) -> f32 {
    let start = delay_for(index);
    if elapsed <= start {
        return 0.0;
    }

    let fade = Duration::from_millis(ENTRANCE_FADE_MS).as_secs_f32();
    let progress = (elapsed - start).as_secs_f32() / fade;
    ease_out_cubic(progress)
}

/// Whether every entrance in a deck of `count` elements has finished.
#[must_use]
pub fn deck_settled(count: usize, elapsed: Duration) -> bool {
    match count {
        0 => true,
        n => elapsed >= delay_for(n - 1) + Duration::from_millis(ENTRANCE_FADE_MS),
    }
}
