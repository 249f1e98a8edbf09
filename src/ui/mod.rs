// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`cards`] - Glass card deck with tilt, glow, and staggered entrances
//! - [`loading`] - Per-panel loading spinner registry
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icon handles
//! - [`styles`] - Centralized styling (glass surfaces, buttons)
//! - [`theme`] - Shared color helpers (frost alpha, fades)
//! - [`theming`] - Light/dark color schemes and the toggle state machine
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod cards;
pub mod design_tokens;
pub mod icons;
pub mod loading;
pub mod notifications;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
