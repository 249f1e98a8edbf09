// SPDX-License-Identifier: MPL-2.0
//! Loading spinner registry.
//!
//! Callers toggle a spinner on or off for a [`Panel`]; the registry keys
//! spinners by panel, so a container can never host more than one and a
//! repeated show is a no-op. Rotation advances on the app's animation tick.

use crate::config::defaults::SPINNER_STEP_RADIANS;
use crate::ui::widgets::Spinner;
use iced::{Color, Element};
use std::collections::HashMap;
use std::f32::consts::TAU;

/// Panels that can host a loading spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The main content area.
    Content,
    /// An individual card, by deck index.
    Card(usize),
}

/// Live spinners, at most one per panel.
#[derive(Debug, Default)]
pub struct Spinners {
    live: HashMap<Panel, f32>,
}

impl Spinners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides the spinner for a panel.
    ///
    /// Showing an already-spinning panel keeps the existing spinner (and its
    /// rotation); hiding a panel without one is a no-op.
    pub fn toggle(&mut self, panel: Panel, show: bool) {
        if show {
            self.live.entry(panel).or_insert(0.0);
        } else {
            self.live.remove(&panel);
        }
    }

    #[must_use]
    pub fn is_live(&self, panel: Panel) -> bool {
        self.live.contains_key(&panel)
    }

    #[must_use]
    pub fn any(&self) -> bool {
        !self.live.is_empty()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Current rotation of a panel's spinner, if one is live.
    #[must_use]
    pub fn rotation(&self, panel: Panel) -> Option<f32> {
        self.live.get(&panel).copied()
    }

    /// Advances every live spinner by one tick.
    pub fn tick(&mut self) {
        for rotation in self.live.values_mut() {
            *rotation = (*rotation + SPINNER_STEP_RADIANS) % TAU;
        }
    }

    /// Renders the spinner for a panel, if one is live.
    pub fn view<Message: 'static>(&self, panel: Panel, color: Color) -> Option<Element<'static, Message>> {
        self.rotation(panel)
            .map(|rotation| Spinner::new(color, rotation).into_element())
    }
}
