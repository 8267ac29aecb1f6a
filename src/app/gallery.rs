// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid shown under the lightbox.

use super::Message;
use crate::catalog::{Gallery, Thumbnail};
use crate::config::DEFAULT_IMAGE_SOURCE;
use crate::media::ImageSource;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component;
use iced::widget::{button, container, image, scrollable, Column, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

const COLUMNS: usize = 5;

pub fn view(gallery: &Gallery) -> Element<'_, Message> {
    let title = Text::new(gallery.title.as_deref().unwrap_or_default()).size(typography::TITLE_MD);

    let rows = gallery
        .thumbnails
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(COLUMNS)
        .fold(Column::new().spacing(spacing::MD), |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, (position, thumbnail)| {
                    row.push(tile(*position, *thumbnail))
                });
            column.push(row)
        });

    let content = Column::new()
        .push(title)
        .push(scrollable(rows).height(Length::Fill))
        .spacing(spacing::LG)
        .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile(position: usize, thumbnail: &Thumbnail) -> Element<'_, Message> {
    let caption = thumbnail.attribute("title").unwrap_or_default();
    let preview: Element<'_, Message> = match thumbnail
        .attribute(DEFAULT_IMAGE_SOURCE)
        .map(ImageSource::parse)
    {
        Some(ImageSource::Local(path)) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        _ => Text::new(caption)
            .size(typography::CAPTION)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .into(),
    };

    button(container(preview).center_x(Length::Fill).center_y(Length::Fill))
        .on_press(Message::Viewer(component::Message::ThumbnailActivated(position)))
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .into()
}
