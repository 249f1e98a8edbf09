// SPDX-License-Identifier: MPL-2.0
//! Pure effect math driving the cosmetic behaviors.
//!
//! Everything in here is deliberately free of widget code so the curves and
//! state machines can be unit-tested (and benchmarked) without a running UI:
//!
//! - [`blur`] - scroll offset → frost intensity interpolation
//! - [`tilt`] - pointer position → card rotation, with reset easing
//! - [`stagger`] - entrance scheduling and fade curves

pub mod blur;
pub mod stagger;
pub mod tilt;
