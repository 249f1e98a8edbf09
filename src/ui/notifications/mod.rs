// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_gloss::ui::notifications::{Manager, Notification};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Preset saved"));
//!
//! // Drive fades from the app's animation tick
//! manager.tick(Instant::now());
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s by default, overridable per notification
//! - Fade-out: 300ms before removal, on both dismissal paths
//! - Max visible toasts: 3 (others are queued)
//! - Position: top-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
