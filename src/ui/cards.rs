// SPDX-License-Identifier: MPL-2.0
//! Glass card deck.
//!
//! Each card owns its tilt state and entrance slot; the deck as a whole is
//! just a `Vec<Card>`. Pointer events are reported per card and never touch
//! a neighbor's state.

use crate::config::preset::Glow;
use crate::effects::tilt::TiltState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::Spinner;
use iced::widget::{mouse_area, Column, Container, Text};
use iced::{alignment, Element, Length, Point, Size, Theme};
use std::time::Instant;

/// Fixed card bounds used for both layout and tilt geometry.
pub const CARD_SIZE: Size = Size {
    width: sizing::CARD_WIDTH,
    height: sizing::CARD_HEIGHT,
};

/// Pointer events reported by a card.
#[derive(Debug, Clone)]
pub enum Event {
    Entered,
    Moved(Point),
    Exited,
    Pressed,
}

/// One card of the deck.
#[derive(Debug)]
pub struct Card {
    title: String,
    body: String,
    index: usize,
    pub tilt: TiltState,
}

/// Everything a card needs from the app to render itself.
#[derive(Clone, Copy)]
pub struct CardEnv {
    pub scheme: ColorScheme,
    /// Glass surface alpha from the frost mapping.
    pub surface_alpha: f32,
    /// Entrance opacity for this card's stagger slot.
    pub entrance: f32,
    /// Glow colors applied while hovered.
    pub glow: Glow,
    /// Rotation of this card's spinner, if one is live.
    pub spinner_rotation: Option<f32>,
    pub now: Instant,
}

impl Card {
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            index,
            tilt: TiltState::default(),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renders the card, reporting pointer activity as [`Event`]s.
    pub fn view(&self, env: CardEnv) -> Element<'_, Event> {
        let CardEnv {
            scheme,
            surface_alpha,
            entrance,
            glow,
            spinner_rotation,
            now,
        } = env;

        let title_color = faded(scheme.text_primary, entrance);
        let body_color = faded(scheme.text_secondary, entrance);

        let mut content = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(self.title.as_str())
                    .size(typography::TITLE_MD)
                    .style(move |_theme: &Theme| iced::widget::text::Style {
                        color: Some(title_color),
                    }),
            )
            .push(
                Text::new(self.body.as_str())
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| iced::widget::text::Style {
                        color: Some(body_color),
                    }),
            );

        if let Some(rotation) = spinner_rotation {
            content = content.push(
                Container::new(
                    Spinner::new(faded(scheme.accent, entrance), rotation).into_element::<Event>(),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
            );
        }

        let sampled = self.tilt.sampled(now);
        let hover_glow = self.tilt.is_hovered().then_some(glow);

        let surface = Container::new(content)
            .width(Length::Fixed(CARD_SIZE.width))
            .height(Length::Fixed(CARD_SIZE.height))
            .padding(spacing::MD)
            .style(move |_theme: &Theme| {
                styles::glass_card(scheme, surface_alpha, entrance, sampled, hover_glow)
            });

        mouse_area(surface)
            .on_enter(Event::Entered)
            .on_move(Event::Moved)
            .on_exit(Event::Exited)
            .on_press(Event::Pressed)
            .into()
    }
}

/// The showcase deck rendered at startup.
#[must_use]
pub fn demo_deck() -> Vec<Card> {
    [
        ("Frost", "Scroll the deck to deepen the frost on every surface."),
        ("Tilt", "Glide the pointer across this card to tip it in 3D."),
        ("Glow", "Hover to light the card edge with the preset glow."),
        ("Spin", "Press any card to toggle its loading spinner."),
        ("Pulse", "Flip the theme and watch the toggle pulse."),
        ("Toasts", "The nav buttons push success, warning, and error toasts."),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (title, body))| Card::new(index, title, body))
    .collect()
}
