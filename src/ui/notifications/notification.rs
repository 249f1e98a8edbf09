// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system. A notification's lifecycle is
//! `Visible → Fading → removed`; both dismissal paths (elapsed duration and
//! explicit close) go through the same fixed-length fade.

use crate::config::defaults::{DEFAULT_NOTIFICATION_MS, NOTIFICATION_FADE_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and icon of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something needs attention but nothing is blocked (orange).
    Warning,
    /// Operation failed (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Visible,
    Fading { since: Instant },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines accent color and icon).
    severity: Severity,
    /// Literal message text shown on the toast.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// How long the toast stays fully visible before fading.
    duration: Duration,
    /// Current lifecycle phase.
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            phase: Phase::Visible,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Overrides the default display duration.
    ///
    /// Useful for messages that need more time to read.
    #[must_use]
    pub fn shown_for(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Instant at which the fully-visible window ends.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Instant {
        self.created_at + self.duration
    }

    /// Whether the visible window has elapsed and the fade should start.
    #[must_use]
    pub fn should_begin_fade(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Visible) && now >= self.dismiss_deadline()
    }

    /// Starts the fade-out. Calling this on an already-fading toast is a no-op,
    /// so an explicit dismiss racing the deadline never restarts the fade.
    pub fn begin_fade(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Visible) {
            self.phase = Phase::Fading { since: now };
        }
    }

    /// Whether the toast is currently fading out.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::Fading { .. })
    }

    /// Whether the fade has completed and the toast can be removed.
    #[must_use]
    pub fn faded_out(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => false,
            Phase::Fading { since } => {
                now.saturating_duration_since(since)
                    >= Duration::from_millis(NOTIFICATION_FADE_MS)
            }
        }
    }

    /// Render opacity at `now`: one while visible, ramping to zero over the fade.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::Fading { since } => {
                let fade = Duration::from_millis(NOTIFICATION_FADE_MS).as_secs_f32();
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / fade).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn default_severity_is_success() {
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn default_duration_is_three_seconds() {
        let n = Notification::success("saved");
        assert_eq!(n.dismiss_deadline() - n.created_at(), Duration::from_secs(3));
    }

    #[test]
    fn shown_for_overrides_the_duration() {
        let n = Notification::warning("slow down").shown_for(Duration::from_secs(10));
        assert_eq!(n.dismiss_deadline() - n.created_at(), Duration::from_secs(10));
    }

    #[test]
    fn fade_begins_only_after_the_deadline() {
        let n = Notification::success("x");
        let deadline = n.dismiss_deadline();

        assert!(!n.should_begin_fade(deadline - Duration::from_millis(1)));
        assert!(n.should_begin_fade(deadline));
        assert!(n.should_begin_fade(deadline + Duration::from_secs(1)));
    }

    #[test]
    fn fade_runs_for_exactly_the_fade_window() {
        let mut n = Notification::success("x");
        let start = n.created_at();
        n.begin_fade(start);

        assert!(n.is_fading());
        assert!(!n.faded_out(start + Duration::from_millis(NOTIFICATION_FADE_MS - 1)));
        assert!(n.faded_out(start + Duration::from_millis(NOTIFICATION_FADE_MS)));
    }

    #[test]
    fn begin_fade_is_idempotent() {
        let mut n = Notification::success("x");
        let start = n.created_at();
        n.begin_fade(start);
        // A later call must not restart the fade clock.
        n.begin_fade(start + Duration::from_millis(200));
        assert!(n.faded_out(start + Duration::from_millis(NOTIFICATION_FADE_MS)));
    }

    #[test]
    fn opacity_ramps_from_one_to_zero() {
        let mut n = Notification::success("x");
        let start = n.created_at();
        assert_eq!(n.opacity(start), 1.0);

        n.begin_fade(start);
        let mid = n.opacity(start + Duration::from_millis(NOTIFICATION_FADE_MS / 2));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(n.opacity(start + Duration::from_millis(NOTIFICATION_FADE_MS)), 0.0);
    }
}
