// SPDX-License-Identifier: MPL-2.0
//! Demo application: a thumbnail gallery with the lightbox mounted over it.
//!
//! The `App` forwards every lightbox message to the viewer component and
//! turns the effects it reports into window commands. It also remembers the
//! window id carried by raw events, which fullscreen switching needs.

mod gallery;
mod message;

pub use message::{Flags, Message};

use crate::catalog::{Gallery, Thumbnail};
use crate::config::Hooks;
use crate::ui::viewer::component::{self, Effect};
use iced::widget::Stack;
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Root application state.
pub struct App {
    viewer: component::State,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("window_id", &self.window_id)
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Gallery built from command-line sources, titled after their file names.
#[must_use]
pub fn gallery_from_sources(sources: &[String]) -> Gallery {
    let thumbnails = sources
        .iter()
        .map(|src| {
            let name = Path::new(src)
                .file_name()
                .map_or_else(|| src.clone(), |name| name.to_string_lossy().into_owned());
            Thumbnail::link(src.clone()).with_title(name)
        })
        .collect();
    Gallery::new(thumbnails).with_title("Gallery")
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let gallery = gallery_from_sources(&flags.sources);
        let hooks = Hooks::default().after_image_load(|index| {
            log::info!("showing image {}", index + 1);
        });

        let viewer = component::State::new(gallery, flags.options, hooks)
            .with_container(Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));
        if viewer.catalog().is_empty() {
            log::warn!("no images given; pass image paths or URLs on the command line");
        }

        (
            Self {
                viewer,
                window_id: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.viewer.current() {
            Some(index) => format!(
                "Iced Lightbox - {} / {}",
                index + 1,
                self.viewer.catalog().len()
            ),
            None => "Iced Lightbox".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => {
                if let component::Message::RawEvent { window, .. } = &message {
                    self.window_id = Some(*window);
                }
                let (effect, task) = self.viewer.handle_message(message);
                Task::batch([task.map(Message::Viewer), self.apply_effect(effect)])
            }
        }
    }

    fn apply_effect(&self, effect: Effect) -> Task<Message> {
        let mode = match effect {
            Effect::None => return Task::none(),
            Effect::EnterFullscreen => window::Mode::Fullscreen,
            Effect::ExitFullscreen => window::Mode::Windowed,
        };
        match self.window_id {
            Some(id) => window::set_mode(id, mode),
            None => {
                log::debug!("no window id yet, ignoring {effect:?}");
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Stack::new()
            .push(gallery::view(self.viewer.gallery()))
            .push(self.viewer.view().map(Message::Viewer))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.viewer.subscription().map(Message::Viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_become_titled_thumbnails() {
        let gallery = gallery_from_sources(&[
            "/tmp/photos/beach.jpg".to_string(),
            "https://example.org/img/city.png".to_string(),
        ]);

        assert_eq!(gallery.thumbnails.len(), 2);
        assert_eq!(gallery.thumbnails[0].attribute("title"), Some("beach.jpg"));
        assert_eq!(
            gallery.thumbnails[1].attribute("href"),
            Some("https://example.org/img/city.png")
        );
        assert_eq!(gallery.thumbnails[1].attribute("title"), Some("city.png"));
    }

    #[test]
    fn raw_events_record_window_id() {
        let flags = Flags {
            sources: vec!["a.png".into()],
            ..Flags::default()
        };
        let (mut app, _) = App::new(flags);
        let id = window::Id::unique();

        let _ = app.update(Message::Viewer(component::Message::RawEvent {
            window: id,
            event: iced::Event::Window(window::Event::Focused),
        }));
        assert_eq!(app.window_id, Some(id));
        assert_eq!(app.title(), "Iced Lightbox");
    }
}
