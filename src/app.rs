// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the glass effects.
//!
//! The `App` struct wires together the domains (theming, effects, toasts,
//! spinners) and translates messages into state changes. Startup runs here as
//! well: configuration loading, preset materialization, and deck construction
//! happen exactly once, in [`App::new`], so the sequencing is easy to audit.

use crate::config::{self, preset, SurfaceRole};
use crate::config::preset::GlassPreset;
use crate::effects::blur::BlurCurve;
use crate::effects::stagger;
use crate::ui::cards::{self, Card, CardEnv, CARD_SIZE};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::loading::{Panel, Spinners};
use crate::ui::notifications::{Manager, Notification, NotificationMessage, Severity, Toast};
use crate::ui::styles;
use crate::ui::theme::{faded, frost_alpha};
use crate::ui::theming::{ColorScheme, ThemeMode, ThemeToggle};
use iced::widget::{button, container, scrollable, stack, Column, Container, Row, Space, Text};
use iced::{alignment, time, window, Background, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    toggle: ThemeToggle,
    blur: BlurCurve,
    /// Current frost intensity, recomputed on every scroll message.
    frost_px: f32,
    frost_cards: bool,
    frost_nav: bool,
    preset: GlassPreset,
    cards: Vec<Card>,
    launched_at: Instant,
    notifications: Manager,
    spinners: Spinners,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component events while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ThemeToggled,
    /// Vertical scroll offset of the card deck.
    Scrolled(f32),
    /// Pointer activity on the card at the given deck index.
    Card(usize, cards::Event),
    /// Demo control: push a toast of the given severity.
    Notify(Severity),
    /// Demo control: toggle the content panel's loading spinner.
    ContentSpinnerToggled,
    Notification(NotificationMessage),
    Tick(std::time::Instant), // Periodic tick driving fades, pulses, and spinners
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme mode override (`light`, `dark`, or `system`).
    pub theme: Option<ThemeMode>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(|state: &App| state.title(), App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        let blur = BlurCurve::default();
        Self {
            toggle: ThemeToggle::default(),
            frost_px: blur.value_at(0.0),
            blur,
            frost_cards: true,
            frost_nav: true,
            preset: GlassPreset::default(),
            cards: cards::demo_deck(),
            launched_at: Instant::now(),
            notifications: Manager::new(),
            spinners: Spinners::new(),
        }
    }
}

impl App {
    /// Runs the one-time startup sequence and builds the initial state.
    ///
    /// Loads the configuration (leniently), materializes the embedded glass
    /// preset into the config directory if absent, applies CLI overrides, and
    /// assembles the staggered card deck.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let preset = preset::ensure_and_load().unwrap_or_else(|err| {
            eprintln!("Failed to materialize the glass preset: {err}");
            GlassPreset::default()
        });

        let mode = flags.theme.or(config.theme_mode).unwrap_or_default();
        let blur = config.blur_curve();

        let app = App {
            toggle: ThemeToggle::new(mode),
            frost_px: blur.value_at(0.0),
            blur,
            frost_cards: config.surface_enabled(SurfaceRole::Card),
            frost_nav: config.surface_enabled(SurfaceRole::NavBar),
            preset,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let mode = if self.toggle.is_dark() { "dark" } else { "light" };
        format!("iced_gloss ({mode} glass)")
    }

    fn theme(&self) -> Theme {
        self.toggle.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeToggled => {
                self.toggle.toggle(Instant::now());
            }
            Message::Scrolled(offset) => {
                self.frost_px = self.blur.value_at(offset);
            }
            Message::Card(index, event) => {
                self.handle_card_event(index, event);
            }
            Message::Notify(severity) => {
                self.notifications
                    .push(Notification::new(severity, demo_message(severity)));
            }
            Message::ContentSpinnerToggled => {
                let live = self.spinners.is_live(Panel::Content);
                self.spinners.toggle(Panel::Content, !live);
            }
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(&notification_message, Instant::now());
            }
            Message::Tick(now) => {
                self.toggle.tick(now);
                self.notifications.tick(now);
                self.spinners.tick();
                for card in &mut self.cards {
                    card.tilt.tick(now);
                }
            }
        }

        Task::none()
    }

    fn handle_card_event(&mut self, index: usize, event: cards::Event) {
        let Some(card) = self.cards.get_mut(index) else {
            return;
        };

        match event {
            cards::Event::Entered => card.tilt.pointer_entered(),
            cards::Event::Moved(at) => card.tilt.pointer_moved(at, CARD_SIZE),
            cards::Event::Exited => card.tilt.pointer_exited(Instant::now()),
            cards::Event::Pressed => {
                let panel = Panel::Card(index);
                let live = self.spinners.is_live(panel);
                self.spinners.toggle(panel, !live);
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.is_animating(Instant::now()) {
            time::every(Duration::from_millis(config::TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Whether any fade, pulse, ease, or spinner still needs ticks.
    fn is_animating(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.launched_at);

        !stagger::deck_settled(self.cards.len(), elapsed)
            || self.toggle.pulse_active(now)
            || self.notifications.has_notifications()
            || self.spinners.any()
            || self.cards.iter().any(|card| card.tilt.is_easing())
    }

    /// Surface alpha for a frosted role, pinned to the floor for flat roles.
    fn surface_alpha(&self, frosted: bool) -> f32 {
        if frosted {
            frost_alpha(self.frost_px, &self.blur)
        } else {
            frost_alpha(self.blur.min_px, &self.blur)
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let scheme = self.toggle.scheme();
        let elapsed = now.saturating_duration_since(self.launched_at);

        let base = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(self.view_nav(scheme, now, elapsed))
                .push(self.view_deck(scheme, now, elapsed)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(scheme.backdrop)),
            ..Default::default()
        });

        let overlay =
            Toast::view_overlay(&self.notifications, scheme, now).map(Message::Notification);

        stack([base.into(), overlay]).into()
    }

    fn view_nav(&self, scheme: ColorScheme, now: Instant, elapsed: Duration) -> Element<'_, Message> {
        // The heading fades in with the first stagger slot.
        let heading_fade = stagger::entrance_opacity(0, elapsed);
        let heading_color = faded(scheme.text_primary, heading_fade);

        let heading = Text::new("iced_gloss")
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| iced::widget::text::Style {
                color: Some(heading_color),
            });

        let notify_buttons = [
            ("Success", Severity::Success),
            ("Warning", Severity::Warning),
            ("Error", Severity::Error),
        ]
        .into_iter()
        .fold(
            Row::new().spacing(spacing::XS),
            |row, (label, severity)| {
                let accent = severity.color();
                row.push(
                    button(Text::new(label).size(typography::CAPTION))
                        .on_press(Message::Notify(severity))
                        .padding([spacing::XXS, spacing::SM])
                        .style(move |_theme: &Theme, status| {
                            styles::accent_button(scheme, accent, status)
                        }),
                )
            },
        );

        let spinner_button = button(Text::new("Load").size(typography::CAPTION))
            .on_press(Message::ContentSpinnerToggled)
            .padding([spacing::XXS, spacing::SM])
            .style(move |_theme: &Theme, status| {
                styles::accent_button(scheme, scheme.accent, status)
            });

        let pulsing = self.toggle.pulse_active(now);
        let toggle_icon = if self.toggle.is_dark() {
            icons::moon()
        } else {
            icons::sun()
        };
        let theme_button = button(icons::sized(
            icons::tinted(toggle_icon, scheme.text_primary),
            sizing::ICON_MD,
        ))
        .on_press(Message::ThemeToggled)
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status| styles::toggle_button(scheme, pulsing, status));

        let nav_alpha = self.surface_alpha(self.frost_nav);
        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(heading)
                .push(Space::with_width(Length::Fill))
                .push(notify_buttons)
                .push(spinner_button)
                .push(theme_button),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAV_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(move |_theme: &Theme| styles::glass_panel(scheme, nav_alpha, heading_fade))
        .into()
    }

    fn view_deck(&self, scheme: ColorScheme, now: Instant, elapsed: Duration) -> Element<'_, Message> {
        let card_alpha = self.surface_alpha(self.frost_cards);

        let deck = self.cards.iter().fold(
            Column::new()
                .spacing(spacing::LG)
                .align_x(alignment::Horizontal::Center),
            |column, card| {
                let index = card.index();
                let env = CardEnv {
                    scheme,
                    surface_alpha: card_alpha,
                    entrance: stagger::entrance_opacity(index, elapsed),
                    glow: self.preset.glow,
                    spinner_rotation: self.spinners.rotation(Panel::Card(index)),
                    now,
                };
                column.push(card.view(env).map(move |event| Message::Card(index, event)))
            },
        );

        let mut content = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::LG, 0.0]);

        if let Some(spinner) = self.spinners.view(Panel::Content, scheme.accent) {
            content = content.push(spinner);
        }
        content = content.push(deck);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset().y))
            .into()
    }
}

/// Demo copy for the nav toast buttons.
fn demo_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Glass preset saved",
        Severity::Warning => "Frost is pinned at maximum",
        Severity::Error => "Could not load the glass preset",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{
        NOTIFICATION_FADE_MS, TILT_RESET_MS, TOGGLE_PULSE_MS,
    };
    use iced::Point;

    fn settled(app: &App) -> Instant {
        app.launched_at + Duration::from_secs(10)
    }

    #[test]
    fn scrolling_adjusts_frost_through_the_curve() {
        let mut app = App::default();
        assert_eq!(app.frost_px, 5.0);

        let _ = app.update(Message::Scrolled(250.0));
        assert_eq!(app.frost_px, 10.0);

        let _ = app.update(Message::Scrolled(9_000.0));
        assert_eq!(app.frost_px, 15.0);

        let _ = app.update(Message::Scrolled(-10.0));
        assert_eq!(app.frost_px, 5.0);
    }

    #[test]
    fn toggling_the_theme_twice_is_a_round_trip() {
        let mut app = App::default();
        let initial_dark = app.toggle.is_dark();
        let initial_title = app.title();

        let _ = app.update(Message::ThemeToggled);
        assert_ne!(app.toggle.is_dark(), initial_dark);
        assert_ne!(app.title(), initial_title);

        let _ = app.update(Message::ThemeToggled);
        assert_eq!(app.toggle.is_dark(), initial_dark);
        assert_eq!(app.title(), initial_title);
    }

    #[test]
    fn pressing_a_card_toggles_its_spinner() {
        let mut app = App::default();

        let _ = app.update(Message::Card(1, cards::Event::Pressed));
        assert!(app.spinners.is_live(Panel::Card(1)));
        assert!(!app.spinners.is_live(Panel::Card(0)));

        let _ = app.update(Message::Card(1, cards::Event::Pressed));
        assert!(!app.spinners.is_live(Panel::Card(1)));
    }

    #[test]
    fn card_events_for_unknown_indices_are_ignored() {
        let mut app = App::default();
        let out_of_range = app.cards.len() + 5;

        let _ = app.update(Message::Card(out_of_range, cards::Event::Pressed));
        assert!(!app.spinners.any());
    }

    #[test]
    fn pointer_flow_drives_the_card_tilt() {
        let mut app = App::default();

        let _ = app.update(Message::Card(0, cards::Event::Entered));
        assert!(app.cards[0].tilt.is_hovered());

        let _ = app.update(Message::Card(0, cards::Event::Moved(Point::new(0.0, 0.0))));
        let _ = app.update(Message::Card(0, cards::Event::Exited));
        assert!(!app.cards[0].tilt.is_hovered());
        assert!(app.cards[0].tilt.is_easing());

        let _ = app.update(Message::Tick(
            Instant::now() + Duration::from_millis(TILT_RESET_MS),
        ));
        assert!(!app.cards[0].tilt.is_easing());
    }

    #[test]
    fn notify_pushes_one_toast_of_that_severity() {
        let mut app = App::default();
        let _ = app.update(Message::Notify(Severity::Warning));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Warning);
    }

    #[test]
    fn dismissal_message_fades_the_toast_out() {
        let mut app = App::default();
        let _ = app.update(Message::Notify(Severity::Success));
        let id = app.notifications.visible().next().unwrap().id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        let _ = app.update(Message::Tick(
            Instant::now() + Duration::from_millis(NOTIFICATION_FADE_MS + 50),
        ));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn animation_predicate_settles_once_everything_is_idle() {
        let mut app = App::default();
        // Entrances still running right after launch.
        assert!(app.is_animating(app.launched_at));
        // Long after launch, with nothing pending, the tick can stop.
        assert!(!app.is_animating(settled(&app)));

        // Each animation source re-arms the predicate.
        let _ = app.update(Message::ContentSpinnerToggled);
        assert!(app.is_animating(settled(&app)));
        let _ = app.update(Message::ContentSpinnerToggled);
        assert!(!app.is_animating(settled(&app)));
    }

    #[test]
    fn ticks_drain_the_toggle_pulse() {
        let mut app = App::default();
        let _ = app.update(Message::ThemeToggled);

        let now = Instant::now();
        assert!(app.toggle.pulse_active(now));

        let after = now + Duration::from_millis(TOGGLE_PULSE_MS + 100);
        let _ = app.update(Message::Tick(after));
        assert!(!app.toggle.pulse_active(after));
    }

    #[test]
    fn demo_messages_cover_every_severity() {
        assert_ne!(demo_message(Severity::Success), demo_message(Severity::Error));
        assert_ne!(
            demo_message(Severity::Warning),
            demo_message(Severity::Error)
        );
    }
}
