// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Number of radial spokes in the spinner ring.
const SPOKES: usize = 12;

/// Spinner drawn as a ring of spokes whose brightness trails the head.
pub struct Spinner {
    cache: Cache,
    rotation: f32, // Head angle in radians
    color: Color,
    diameter: f32,
}

impl Spinner {
    /// Creates a spinner with the given color and head rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            diameter: sizing::SPINNER,
        }
    }

    /// Overrides the spinner diameter.
    #[must_use]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let side = self.diameter;
        Canvas::new(self)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let outer = frame.width().min(frame.height()) / 2.0 - 2.0;
                let inner = outer * 0.55;

                for spoke in 0..SPOKES {
                    // Spoke 0 is the head; each following spoke trails it and fades.
                    #[allow(clippy::cast_precision_loss)]
                    let trail = spoke as f32 / SPOKES as f32;
                    #[allow(clippy::cast_precision_loss)]
                    let angle = self.rotation - trail * TAU;

                    let (sin, cos) = angle.sin_cos();
                    let from = Point::new(center.x + inner * cos, center.y + inner * sin);
                    let to = Point::new(center.x + outer * cos, center.y + outer * sin);

                    let alpha = (1.0 - trail).max(0.15) * self.color.a;
                    frame.stroke(
                        &Path::line(from, to),
                        Stroke::default()
                            .with_width(3.0)
                            .with_color(Color {
                                a: alpha,
                                ..self.color
                            })
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}
