// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as small
//! cards with severity-colored accents and a dismiss button. A fading toast
//! renders with its phase opacity applied to every layer.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theme::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        scheme: ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();
        let alpha = notification.opacity(now);

        // Severity icon, tinted with the accent color
        let icon = icons::sized(
            icons::tinted(Self::severity_icon(severity), faded(accent, alpha)),
            sizing::ICON_MD,
        );

        // Message text
        let text_color = faded(scheme.text_primary, alpha);
        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        // Dismiss button
        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(
            icons::tinted(icons::cross(), faded(scheme.text_secondary, alpha)),
            sizing::ICON_SM,
        ))
        .on_press(Message::Dismiss(notification_id))
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status| dismiss_button_style(scheme, status));

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(scheme, accent, alpha))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the top-right corner, newest on top.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        scheme: ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, scheme, now))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon(severity: Severity) -> Svg<'static> {
        match severity {
            Severity::Success => icons::check(),
            Severity::Warning => icons::warning(),
            Severity::Error => icons::alert(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(scheme: ColorScheme, accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(scheme.surface, alpha))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(faded(scheme.text_primary, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(scheme: ColorScheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: scheme.text_primary,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..base
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let scheme = ColorScheme::dark();
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(scheme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn fading_toast_attenuates_every_layer() {
        let scheme = ColorScheme::dark();
        let style = toast_container_style(scheme, palette::ERROR_500, 0.5);

        assert!(style.border.color.a < palette::ERROR_500.a);
        if let Some(iced::Background::Color(bg)) = style.background {
            assert!(bg.a < scheme.surface.a);
        } else {
            panic!("toast background should be a flat color");
        }
    }

    #[test]
    fn severity_icons_are_defined() {
        // Just verify icons don't panic when created
        let _ = Toast::severity_icon(Severity::Success);
        let _ = Toast::severity_icon(Severity::Warning);
        let _ = Toast::severity_icon(Severity::Error);
    }
}
