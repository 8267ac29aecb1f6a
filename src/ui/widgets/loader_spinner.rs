// SPDX-License-Identifier: MPL-2.0
//! Loader spinner drawn while an image takes longer than the loader delay.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;

/// A half ring rotating over a faint full ring.
#[derive(Debug, Clone, Copy)]
pub struct LoaderSpinner {
    rotation: f32,
    color: Color,
    opacity: f32,
}

impl LoaderSpinner {
    /// `rotation` is in radians; `opacity` scales the color's alpha.
    #[must_use]
    pub fn new(color: Color, rotation: f32, opacity: f32) -> Self {
        Self {
            rotation,
            color,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .into()
    }

    fn tinted(&self, alpha: f32) -> Color {
        Color {
            a: self.color.a * alpha * self.opacity,
            ..self.color
        }
    }
}

impl<Message> canvas::Program<Message> for LoaderSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.tinted(0.25)),
        );

        // start at twelve o'clock
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.tinted(1.0))
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn opacity_scales_alpha() {
        let spinner = LoaderSpinner::new(Color::WHITE, 0.0, 0.5);
        assert_abs_diff_eq!(spinner.tinted(1.0).a, 0.5);
        assert_abs_diff_eq!(spinner.tinted(0.25).a, 0.125);
    }

    #[test]
    fn opacity_is_clamped() {
        let spinner = LoaderSpinner::new(Color::WHITE, 0.0, 3.0);
        assert_abs_diff_eq!(spinner.tinted(1.0).a, 1.0);
    }
}
