// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and owns every
//! pending deadline: dismissing a toast or clearing the manager cancels the
//! corresponding auto-dismiss, so no timer can outlive its toast.

use super::notification::{Notification, NotificationId};
use crate::config::defaults::MAX_VISIBLE_TOASTS;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than [`MAX_VISIBLE_TOASTS`] notifications are showing, it's
    /// displayed immediately. Otherwise, it's added to the queue and shown
    /// when space becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE_TOASTS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// A visible toast starts its fade-out; a queued one is dropped outright.
    /// Returns `true` if the notification was found.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) {
            notification.begin_fade(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick, starting due fades and removing finished ones.
    ///
    /// Should be called periodically (the app's animation tick) to handle
    /// auto-dismiss and fade completion. Auto-dismiss fades are anchored at
    /// the toast's deadline rather than the observing tick, so removal lands
    /// exactly `duration + fade` after creation regardless of tick jitter.
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.visible {
            if notification.should_begin_fade(now) {
                let deadline = notification.dismiss_deadline();
                notification.begin_fade(deadline);
            }
        }

        let before = self.visible.len();
        self.visible.retain(|n| !n.faded_out(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes queued notifications to visible while there's space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_TOASTS {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}
