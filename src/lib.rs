// SPDX-License-Identifier: MPL-2.0
//! `iced_gloss` is a glassmorphism effects playground built with the Iced GUI framework.
//!
//! It renders a deck of frosted-glass cards and demonstrates scroll-driven blur,
//! pointer-driven card tilt, a dark/light theme toggle, toast notifications, and
//! per-panel loading spinners.

#![doc(html_root_url = "https://docs.rs/iced_gloss/0.1.0")]

pub mod app;
pub mod config;
pub mod effects;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
