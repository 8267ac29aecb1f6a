// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Style for chrome buttons drawn over the overlay (close, fullscreen).
///
/// `fade` is the current opacity of the wrapper they sit in.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha * fade,
                ..BLACK
            })),
            text_color: Color {
                a: text_color.a * fade,
                ..text_color
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Style for a navigation arrow. Inactive arrows are dimmed and ignore hover.
pub fn arrow(active: bool, fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (false, _) => palette::GRAY_700,
            (true, button::Status::Hovered | button::Status::Pressed) => palette::PRIMARY_400,
            (true, _) => WHITE,
        };

        button::Style {
            background: None,
            text_color: Color {
                a: color.a * fade,
                ..color
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Style for a gallery thumbnail tile.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => palette::GRAY_700,
    };

    button::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: palette::GRAY_200,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn overlay_fades_with_wrapper() {
        let style = overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG, 0.5)(
            &Theme::Dark,
            button::Status::Hovered,
        );
        assert_abs_diff_eq!(style.text_color.a, 0.5);
        match style.background {
            Some(Background::Color(color)) => {
                assert_abs_diff_eq!(color.a, opacity::OVERLAY_STRONG * 0.5);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn inactive_arrow_ignores_hover() {
        let style = arrow(false, 1.0)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.text_color, palette::GRAY_700);
    }
}
