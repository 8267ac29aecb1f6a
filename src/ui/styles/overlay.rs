// SPDX-License-Identifier: MPL-2.0
//! Container styles for the lightbox bars.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Translucent strip behind the top and bottom bars, faded with the wrapper.
pub fn bar(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * fade,
            ..BLACK
        })),
        text_color: Some(Color { a: fade, ..WHITE }),
        ..Default::default()
    }
}
