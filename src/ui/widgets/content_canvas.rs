// SPDX-License-Identifier: MPL-2.0
//! Canvas painting the backdrop and the placed image.
//!
//! Presses are split in two: inside the drawn image rectangle they report
//! the press position, anywhere else they hit the backdrop.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::viewer::fit::Geometry as Placement;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::image;
use iced::{mouse, Color, Point, Rectangle, Renderer, Theme, Vector};

/// Snapshot of what the content area shows in one frame.
pub struct ContentCanvas<'a, Message> {
    image: Option<&'a image::Handle>,
    placement: Placement,
    margin: Vector,
    backdrop_opacity: f32,
    image_opacity: f32,
    on_image_press: fn(Point) -> Message,
    on_backdrop_press: Message,
}

impl<'a, Message: Clone> ContentCanvas<'a, Message> {
    #[must_use]
    pub fn new(
        image: Option<&'a image::Handle>,
        placement: Placement,
        margin: Vector,
        on_image_press: fn(Point) -> Message,
        on_backdrop_press: Message,
    ) -> Self {
        Self {
            image,
            placement,
            margin,
            backdrop_opacity: 1.0,
            image_opacity: 1.0,
            on_image_press,
            on_backdrop_press,
        }
    }

    /// Fade levels of the overlay and of the wrapper.
    #[must_use]
    pub fn opacities(mut self, backdrop: f32, image: f32) -> Self {
        self.backdrop_opacity = backdrop.clamp(0.0, 1.0);
        self.image_opacity = image.clamp(0.0, 1.0);
        self
    }

    /// Where the image is drawn, pan margin included.
    #[must_use]
    pub fn image_bounds(&self) -> Rectangle {
        self.placement.rectangle() + self.margin
    }

    fn press(&self, position: Point) -> Message {
        if self.image.is_some() && self.image_bounds().contains(position) {
            (self.on_image_press)(position)
        } else {
            self.on_backdrop_press.clone()
        }
    }
}

impl<Message: Clone> canvas::Program<Message> for ContentCanvas<'_, Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(canvas::Action::publish(self.press(position)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color {
                a: opacity::OVERLAY_STRONG * self.backdrop_opacity,
                ..palette::BLACK
            },
        );

        if let Some(handle) = self.image {
            frame.draw_image(
                self.image_bounds(),
                canvas::Image::new(handle.clone()).opacity(self.image_opacity),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(position) if self.image.is_some() && self.image_bounds().contains(position) => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Pressed {
        Image(Point),
        Backdrop,
    }

    fn placement() -> Placement {
        Placement {
            width: 200.0,
            height: 100.0,
            top: 50.0,
            left: 40.0,
        }
    }

    #[test]
    fn presses_split_between_image_and_backdrop() {
        let handle = image::Handle::from_rgba(1, 1, vec![0; 4]);
        let canvas = ContentCanvas::new(
            Some(&handle),
            placement(),
            Vector::ZERO,
            Pressed::Image,
            Pressed::Backdrop,
        );

        assert_eq!(
            canvas.press(Point::new(100.0, 100.0)),
            Pressed::Image(Point::new(100.0, 100.0))
        );
        assert_eq!(canvas.press(Point::new(10.0, 10.0)), Pressed::Backdrop);
    }

    #[test]
    fn pan_margin_moves_hit_area() {
        let handle = image::Handle::from_rgba(1, 1, vec![0; 4]);
        let canvas = ContentCanvas::new(
            Some(&handle),
            placement(),
            Vector::new(-40.0, 0.0),
            Pressed::Image,
            Pressed::Backdrop,
        );

        assert_eq!(canvas.image_bounds().x, 0.0);
        assert_eq!(canvas.press(Point::new(230.0, 100.0)), Pressed::Backdrop);
    }

    #[test]
    fn nothing_to_hit_without_image() {
        let canvas = ContentCanvas::new(
            None,
            placement(),
            Vector::ZERO,
            Pressed::Image,
            Pressed::Backdrop,
        );
        assert_eq!(canvas.press(Point::new(100.0, 100.0)), Pressed::Backdrop);
    }
}
