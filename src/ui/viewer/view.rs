// SPDX-License-Identifier: MPL-2.0
//! Rendering of the lightbox.
//!
//! Layers, bottom to top: the content canvas (backdrop and image), the
//! chrome (bars and arrows) and the loader spinner. Nothing is rendered once
//! the wrapper has faded out.

use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{Message, State};
use crate::ui::viewer::markup::{Arrow, Markup};
use crate::ui::widgets::{ContentCanvas, LoaderSpinner};
use iced::widget::{button, container, mouse_area, Canvas, Column, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let now = state.now();
    let Some(markup) = state.markup() else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };
    if !markup.wrapper.is_visible(now) && !markup.overlay.is_visible(now) {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    let fade = markup.wrapper.opacity(now);

    let content = Canvas::new(
        ContentCanvas::new(
            markup.image.handle.as_ref(),
            markup.content.value_at(now),
            markup.image.margin.value_at(now),
            Message::ImagePressed,
            Message::OverlayPressed,
        )
        .opacities(markup.overlay.opacity(now), fade),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .push(content)
        .push(chrome(markup, state.is_fullscreen(), fade))
        .width(Length::Fill)
        .height(Length::Fill);

    if markup.loader.is_visible(now) {
        let spinner = LoaderSpinner::new(
            palette::WHITE,
            markup.spinner_rotation,
            markup.loader.opacity(now),
        );
        layers = layers.push(
            container(spinner.into_element())
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );
    }

    layers.into()
}

fn chrome(markup: &Markup, fullscreen: bool, fade: f32) -> Element<'_, Message> {
    let close = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(Message::ClosePressed)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::TRANSPARENT,
            opacity::OVERLAY_MEDIUM,
            fade,
        ));

    let top = Row::new()
        .push(Text::new(markup.set_title.as_str()).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(close)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::MD]);

    let fullscreen_label = if fullscreen { "⤡" } else { "⤢" };
    let fullscreen = button(Text::new(fullscreen_label).size(typography::BODY))
        .on_press(Message::FullscreenPressed)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::TRANSPARENT,
            opacity::OVERLAY_MEDIUM,
            fade,
        ));

    let bottom = Row::new()
        .push(
            Text::new(markup.description.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(Text::new(markup.pagination.as_str()).size(typography::CAPTION))
        .push(fullscreen)
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::MD]);

    let middle = Row::new()
        .push(arrow("‹", markup.left, Message::LeftArrowPressed, fade))
        .push(Space::new().width(Length::Fill).height(Length::Fill))
        .push(arrow("›", markup.right, Message::RightArrowPressed, fade))
        .height(Length::Fill);

    Column::new()
        .push(bar(top.into(), sizing::TOP_BAR_HEIGHT, fade))
        .push(middle)
        .push(bar(bottom.into(), sizing::BOTTOM_BAR_HEIGHT, fade))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A bar belongs to the wrapper: pressing it outside its buttons zooms out.
fn bar(content: Element<'_, Message>, height: f32, fade: f32) -> Element<'_, Message> {
    mouse_area(
        container(content)
            .width(Length::Fill)
            .center_y(Length::Fixed(height))
            .style(styles::overlay::bar(fade)),
    )
    .on_release(Message::WrapperPressed)
    .into()
}

fn arrow<'a>(glyph: &'a str, arrow: Arrow, on_press: Message, fade: f32) -> Element<'a, Message> {
    let label = Text::new(glyph)
        .size(sizing::ICON_LG)
        .align_x(alignment::Horizontal::Center);

    button(label)
        .on_press_maybe(arrow.active.then_some(on_press))
        .width(Length::Fixed(sizing::ARROW_WIDTH))
        .height(Length::Fill)
        .padding(0)
        .style(styles::button_arrow(arrow.active, fade))
        .into()
}
