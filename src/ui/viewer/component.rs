// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the catalog, the constructed markup and every timer of
//! the lightbox. Asynchronous work (preloads, delays, debounces) runs as
//! [`Task`]s whose completion messages carry the request generation or timer
//! ticket they were issued under; completions that no longer match are
//! dropped, so a superseded load can never disturb a newer one.

use crate::catalog::{Catalog, Dimensions, Gallery, ImageDescriptor, Thumbnail};
use crate::config::{
    Hooks, OptionValue, Options, SizingMode, ANIMATION_TICK, CLOSE_FADE, LOADER_FADE_IN,
    LOADER_FADE_OUT, RESIZE_DEBOUNCE,
};
use crate::error::Result;
use crate::media::{LoadOutcome, LoadedImage, Preloader};
use crate::ui::fullscreen::Fullscreen;
use crate::ui::listeners::{Action, ListenerRegistry, NavKey, Target, Trigger};
use crate::ui::state::{navigation, zoom, TimerSlot, ZoomState};
use crate::ui::viewer::fit::fit;
use crate::ui::viewer::markup::{ElementName, ElementRef, Marker, Markers, Markup};
use crate::ui::viewer::view;
use iced::{event, keyboard, mouse, window, Element, Point, Rectangle, Size, Task, Vector};
use std::collections::HashSet;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Loader spinner rotation per frame tick, in radians.
const SPINNER_SPEED: f32 = 0.1;

/// Rendered sizes within this many pixels of the natural size do not count
/// as stretched.
const STRETCH_TOLERANCE: f32 = 0.5;

/// Lifecycle phase of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Markup and listeners are being set up.
    Opening,
    Loading(usize),
    Displayed(usize),
    Zoomed(usize),
    /// Fading out after `close`.
    Closing,
}

/// Messages emitted by the lightbox widgets and its background tasks.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery thumbnail was activated, by gallery position.
    ThumbnailActivated(usize),
    LeftArrowPressed,
    RightArrowPressed,
    OverlayPressed,
    ClosePressed,
    FullscreenPressed,
    WrapperPressed,
    /// The image was pressed at a point relative to the container.
    ImagePressed(Point),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Bounds of the host element, for `ContainerScope::Element`.
    ContainerResized(Rectangle),
    Preloaded {
        generation: u64,
        index: usize,
        outcome: LoadOutcome,
    },
    /// A look-ahead preload settled.
    Prefetched {
        index: usize,
        outcome: LoadOutcome,
    },
    LoaderDelayElapsed(u64),
    LoaderHidden {
        generation: u64,
        index: usize,
        image: Option<LoadedImage>,
    },
    ResizeSettled(u64),
    CloseFinished(u64),
    Tick(Instant),
}

/// Side effects the host application should perform after a viewer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    EnterFullscreen,
    ExitFullscreen,
}

/// Complete lightbox state: configuration, catalog and session.
pub struct State {
    options: Options,
    hooks: Hooks,
    gallery: Gallery,
    catalog: Catalog,
    set_title: String,
    preloader: Preloader,
    listeners: ListenerRegistry,
    fullscreen: Fullscreen,
    markup: Option<Markup>,
    markers: Markers,
    phase: Phase,
    current: Option<usize>,
    initialized: bool,
    /// Active sizing mode; `Native` while zoomed.
    sizing_mode: SizingMode,
    zoom: ZoomState,
    generation: u64,
    loader_timer: TimerSlot,
    resize_timer: TimerSlot,
    container: Rectangle,
    pending_container: Option<Rectangle>,
    pointer: Option<Point>,
    prefetching: HashSet<usize>,
    /// Most recent look-ahead result, kept even when the cache refuses it.
    buffered: Option<(usize, LoadedImage)>,
    preload_requests: u64,
    now: Instant,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("images", &self.catalog.len())
            .field("sizing_mode", &self.sizing_mode)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Builds a lightbox over `gallery` and binds its matching thumbnails.
    #[must_use]
    pub fn new(gallery: Gallery, options: Options, hooks: Hooks) -> Self {
        let discovery = Catalog::discover(&gallery, &options.image_selector, &options.image_source);
        let mut listeners = ListenerRegistry::new();
        for (position, index) in discovery.bindings {
            listeners.attach(Target::Thumbnail(position), Trigger::Activate, Action::Open(index));
        }
        log::debug!("lightbox bound to {} image(s)", discovery.catalog.len());

        let set_title = options
            .set_title
            .clone()
            .or_else(|| gallery.title.clone())
            .unwrap_or_default();

        Self {
            sizing_mode: options.image_size,
            options,
            hooks,
            gallery,
            catalog: discovery.catalog,
            set_title,
            preloader: Preloader::default(),
            listeners,
            fullscreen: Fullscreen::default(),
            markup: None,
            markers: Markers::default(),
            phase: Phase::Closed,
            current: None,
            initialized: false,
            zoom: ZoomState::default(),
            generation: 0,
            loader_timer: TimerSlot::default(),
            resize_timer: TimerSlot::default(),
            container: Rectangle::default(),
            pending_container: None,
            pointer: None,
            prefetching: HashSet::new(),
            buffered: None,
            preload_requests: 0,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn with_preloader(mut self, preloader: Preloader) -> Self {
        self.preloader = preloader;
        self
    }

    /// Declares whether the host can switch to fullscreen.
    #[must_use]
    pub fn with_fullscreen_support(mut self, supported: bool) -> Self {
        self.fullscreen = Fullscreen::new(supported);
        self
    }

    /// Sets the initial container size, anchored at the origin.
    #[must_use]
    pub fn with_container(mut self, size: Size) -> Self {
        self.container = Rectangle::new(Point::ORIGIN, size);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the image being shown or loaded; `None` while closed.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    #[must_use]
    pub fn sizing_mode(&self) -> SizingMode {
        self.sizing_mode
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// Pan margin the image is heading to.
    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.markup
            .as_ref()
            .map_or(Vector::ZERO, |markup| markup.image.margin.target())
    }

    /// Number of preloads issued for displayed images, look-ahead excluded.
    #[must_use]
    pub fn preload_requests(&self) -> u64 {
        self.preload_requests
    }

    /// Generation of the most recent load request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    #[must_use]
    pub fn markup(&self) -> Option<&Markup> {
        self.markup.as_ref()
    }

    #[must_use]
    pub fn container(&self) -> Rectangle {
        self.container
    }

    /// Instant of the latest frame or operation, used to sample animations.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Looks up a part of the viewer by logical name.
    ///
    /// `"container"` is always available; the other parts exist only between
    /// the first `open` and `destroy`.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<ElementRef<'_>> {
        let name: ElementName = name.parse().ok()?;
        if name == ElementName::Container {
            return Some(ElementRef::Container(&self.markers));
        }
        self.markup
            .as_ref()
            .map(|markup| markup.element(name, &self.markers))
    }

    // ------------------------------------------------------------------
    // Public operations
    // ------------------------------------------------------------------

    /// Opens the viewer on image `index`, building it on first use.
    pub fn open(&mut self, index: usize) -> (Effect, Task<Message>) {
        if index >= self.catalog.len() {
            log::warn!(
                "cannot open image {index}: gallery has {} image(s)",
                self.catalog.len()
            );
            return (Effect::None, Task::none());
        }

        if !self.initialized {
            self.initialize();
        }
        (self.hooks.after_initialize)();

        self.load(index)
    }

    /// Alias of [`State::open`].
    pub fn goto(&mut self, index: usize) -> (Effect, Task<Message>) {
        self.open(index)
    }

    pub fn next(&mut self) -> (Effect, Task<Message>) {
        self.change(1)
    }

    pub fn prev(&mut self) -> (Effect, Task<Message>) {
        self.change(-1)
    }

    /// Closes the viewer, or leaves fullscreen if it is active.
    pub fn close(&mut self) -> (Effect, Task<Message>) {
        if self.fullscreen.exit() {
            log::debug!("close leaves fullscreen only");
            return (Effect::ExitFullscreen, Task::none());
        }
        if self.current.is_none() {
            return (Effect::None, Task::none());
        }

        self.zoom_out(Some(Duration::ZERO));
        self.loader_timer.cancel();
        self.generation += 1;

        let now = self.clock();
        if let Some(markup) = self.markup.as_mut() {
            markup.overlay.fade_out(now, CLOSE_FADE);
            markup.loader.fade_out(now, CLOSE_FADE);
            markup.wrapper.fade_out(now, CLOSE_FADE);
        }
        self.markers.remove(&Marker::Zoomable);
        self.current = None;
        self.phase = Phase::Closing;
        log::debug!("closing lightbox");

        let generation = self.generation;
        let task = Task::perform(
            async move {
                tokio::time::sleep(CLOSE_FADE).await;
                generation
            },
            Message::CloseFinished,
        );
        (Effect::None, task)
    }

    /// Tears the viewer down. Thumbnails stop opening it.
    pub fn destroy(&mut self) -> Effect {
        self.listeners.detach_thumbnails();
        if !self.initialized {
            return Effect::None;
        }

        let effect = if self.fullscreen.exit() {
            Effect::ExitFullscreen
        } else {
            Effect::None
        };

        self.listeners.detach_viewer();
        self.buffered = None;
        self.generation += 1;
        self.loader_timer.cancel();
        self.resize_timer.cancel();
        self.pending_container = None;
        self.zoom.reset();
        self.sizing_mode = self.options.image_size;
        self.current = None;
        self.initialized = false;
        self.markers.clear();
        self.markup = None;
        self.phase = Phase::Closed;
        log::debug!("lightbox destroyed");

        effect
    }

    /// Re-fits the current image and refreshes the bars, arrows and
    /// zoomability.
    pub fn place(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.clock();
        self.refresh_chrome();
        self.refit(self.options.transition());
        self.refresh_zoomable();
    }

    /// Zooms in to native size, panning towards `pointer` (container
    /// coordinates). Returns whether zoom was entered.
    pub fn zoom_in(&mut self, pointer: Point) -> bool {
        let Phase::Displayed(index) = self.phase else {
            return false;
        };
        if !self.zoom.enter(self.sizing_mode) {
            return false;
        }

        self.clock();
        let duration = self.options.transition();
        self.sizing_mode = SizingMode::Native;
        self.pan_to(pointer, duration);
        self.markers.insert(Marker::Zoomed);
        self.refit(duration);
        self.phase = Phase::Zoomed(index);
        log::debug!("zoomed in on image {index}");
        true
    }

    /// Restores the pre-zoom sizing mode over `duration`, or the configured
    /// transition when `None`. Returns whether zoom was left.
    pub fn zoom_out(&mut self, duration: Option<Duration>) -> bool {
        let Some(index) = self.current else {
            return false;
        };
        let Some(base) = self.zoom.exit() else {
            return false;
        };

        let now = self.clock();
        let duration = duration.unwrap_or_else(|| self.options.transition());
        self.sizing_mode = base;
        if let Some(markup) = self.markup.as_mut() {
            markup.image.margin.animate_to(now, Vector::ZERO, duration);
        }
        self.markers.remove(&Marker::Zoomed);
        self.refit(duration);
        if self.phase == Phase::Zoomed(index) {
            self.phase = Phase::Displayed(index);
        }
        true
    }

    /// Reads an option by its serialized name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        self.options.get(name)
    }

    /// Writes an option at runtime and applies its side effects.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] for unknown names and
    /// values of the wrong type.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<OptionValue> {
        let stored = self.options.set(name, value)?;
        self.clock();

        match name {
            "image_size" => {
                let mode = self.options.image_size;
                if self.zoom.is_zoomed() {
                    self.zoom.rebase(mode);
                } else {
                    self.sizing_mode = mode;
                    self.refit(self.options.transition());
                    self.refresh_zoomable();
                }
                if self.initialized {
                    self.markers.toggle(Marker::Cover, mode == SizingMode::Cover);
                }
            }
            "loop" | "link_images" | "separator" => self.refresh_chrome(),
            "class_name" if self.initialized => {
                self.markers.remove_custom();
                if !self.options.class_name.is_empty() {
                    self.markers
                        .insert(Marker::Custom(self.options.class_name.clone()));
                }
            }
            "set_title" => {
                self.set_title = self
                    .options
                    .set_title
                    .clone()
                    .or_else(|| self.gallery.title.clone())
                    .unwrap_or_default();
                if let Some(markup) = self.markup.as_mut() {
                    markup.set_title.clone_from(&self.set_title);
                }
            }
            "container" if self.initialized => {
                self.markers
                    .toggle(Marker::InContainer, !self.options.container.is_window());
            }
            "enable_zoom" => self.refresh_zoomable(),
            _ => {}
        }

        Ok(stored)
    }

    /// Adds a thumbnail to the gallery. Returns its catalog index when it
    /// participates in the lightbox.
    pub fn append(&mut self, thumbnail: Thumbnail) -> Option<usize> {
        let position = self.gallery.thumbnails.len();
        let descriptor = crate::catalog::Selector::parse(&self.options.image_selector)
            .matches(&thumbnail)
            .then(|| Catalog::describe(&thumbnail, &self.options.image_source))
            .flatten();
        self.gallery.thumbnails.push(thumbnail);

        let index = self.catalog.push(descriptor?);
        self.listeners
            .attach(Target::Thumbnail(position), Trigger::Activate, Action::Open(index));
        self.refresh_chrome();
        Some(index)
    }

    // ------------------------------------------------------------------
    // Iced plumbing
    // ------------------------------------------------------------------

    pub fn subscription(&self) -> iced::Subscription<Message> {
        let events = event::listen_with(|event, _status, window| {
            matches!(
                event,
                event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
                    | event::Event::Mouse(mouse::Event::CursorMoved { .. })
                    | event::Event::Window(
                        window::Event::Resized(_) | window::Event::Opened { .. }
                    )
            )
            .then_some(Message::RawEvent { window, event })
        });

        let animating = self.markup.as_ref().is_some_and(|markup| {
            markup.is_animating(self.now) || markup.loader.is_visible(self.now)
        });
        let tick = if animating {
            iced::time::every(ANIMATION_TICK).map(Message::Tick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([events, tick])
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ThumbnailActivated(position) => {
                self.dispatch(Target::Thumbnail(position), Trigger::Activate)
            }
            Message::LeftArrowPressed => self.dispatch(Target::LeftArrow, Trigger::Activate),
            Message::RightArrowPressed => self.dispatch(Target::RightArrow, Trigger::Activate),
            Message::OverlayPressed => self.dispatch(Target::Overlay, Trigger::Activate),
            Message::ClosePressed => self.dispatch(Target::CloseButton, Trigger::Activate),
            Message::FullscreenPressed => {
                self.dispatch(Target::FullscreenButton, Trigger::Activate)
            }
            Message::WrapperPressed => self.dispatch(Target::Wrapper, Trigger::Activate),
            Message::ImagePressed(point) => {
                self.pointer = Some(point + self.origin());
                self.dispatch(Target::Image, Trigger::Activate)
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::ContainerResized(bounds) => {
                if self.options.container.is_window() {
                    log::debug!("ignoring host bounds while mounted on the window");
                    return (Effect::None, Task::none());
                }
                (Effect::None, self.handle_resize(bounds))
            }
            Message::Preloaded {
                generation,
                index,
                outcome,
            } => (Effect::None, self.handle_preloaded(generation, index, outcome)),
            Message::Prefetched { index, outcome } => {
                self.prefetching.remove(&index);
                if let Some(dimensions) = outcome.dimensions() {
                    self.catalog.record_dimensions(index, dimensions);
                }
                if let Some(image) = outcome.into_image() {
                    self.buffered = Some((index, image));
                }
                (Effect::None, Task::none())
            }
            Message::LoaderDelayElapsed(ticket) => {
                if self.loader_timer.fire(ticket) {
                    let now = self.clock();
                    if let Some(markup) = self.markup.as_mut() {
                        markup.loader.fade_in(now, LOADER_FADE_IN);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::LoaderHidden {
                generation,
                index,
                image,
            } => {
                if generation == self.generation {
                    self.appear(index, image);
                } else {
                    log::debug!("discarding stale reveal of image {index}");
                }
                (Effect::None, Task::none())
            }
            Message::ResizeSettled(ticket) => {
                if self.resize_timer.fire(ticket) {
                    self.settle_resize(self.options.transition());
                }
                (Effect::None, Task::none())
            }
            Message::CloseFinished(generation) => {
                if generation == self.generation && self.phase == Phase::Closing {
                    self.markers.remove(&Marker::Open);
                    self.phase = Phase::Closed;
                }
                (Effect::None, Task::none())
            }
            Message::Tick(now) => {
                self.now = now;
                if let Some(markup) = self.markup.as_mut() {
                    if markup.loader.is_visible(now) {
                        markup.spinner_rotation = (markup.spinner_rotation + SPINNER_SPEED) % TAU;
                    }
                }
                (Effect::None, Task::none())
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn clock(&mut self) -> Instant {
        self.now = Instant::now().max(self.now);
        self.now
    }

    fn origin(&self) -> Vector {
        Vector::new(self.container.x, self.container.y)
    }

    fn initialize(&mut self) {
        self.phase = Phase::Opening;
        self.markup = Some(Markup::new(self.options.set_index, self.set_title.clone()));

        if !self.options.class_name.is_empty() {
            self.markers
                .insert(Marker::Custom(self.options.class_name.clone()));
        }
        self.markers
            .toggle(Marker::Cover, self.options.image_size == SizingMode::Cover);
        self.markers
            .toggle(Marker::InContainer, !self.options.container.is_window());

        let bindings = [
            (Target::Key(NavKey::Left), Trigger::KeyDown, Action::Change(-1)),
            (Target::Key(NavKey::Right), Trigger::KeyDown, Action::Change(1)),
            (Target::Key(NavKey::Escape), Trigger::KeyDown, Action::Close),
            (Target::LeftArrow, Trigger::Activate, Action::Change(-1)),
            (Target::RightArrow, Trigger::Activate, Action::Change(1)),
            (Target::Overlay, Trigger::Activate, Action::Close),
            (Target::CloseButton, Trigger::Activate, Action::Close),
            (Target::FullscreenButton, Trigger::Activate, Action::ToggleFullscreen),
            (Target::Wrapper, Trigger::Activate, Action::ZoomOut),
            (Target::Image, Trigger::Activate, Action::ToggleZoom),
            (Target::Wrapper, Trigger::PointerMove, Action::Pan),
            (Target::Container, Trigger::Resize, Action::Resize),
        ];
        for (target, trigger, action) in bindings {
            self.listeners.attach(target, trigger, action);
        }

        self.initialized = true;
        log::debug!("lightbox markup built for set {}", self.options.set_index);
        (self.hooks.after_markup)();
    }

    fn load(&mut self, index: usize) -> (Effect, Task<Message>) {
        let effect = if self.options.full_screen && self.fullscreen.try_enter() {
            Effect::EnterFullscreen
        } else {
            Effect::None
        };

        if self.current == Some(index) {
            return (effect, Task::none());
        }
        let Some(src) = self.catalog.get(index).map(|image| image.src.clone()) else {
            return (effect, Task::none());
        };

        self.zoom_out(Some(Duration::ZERO));
        self.generation += 1;
        self.current = Some(index);
        self.phase = Phase::Loading(index);
        log::debug!("loading image {index} (generation {})", self.generation);

        let now = self.clock();
        let duration = self.options.transition();
        if let Some(markup) = self.markup.as_mut() {
            markup.overlay.fade_in(now, duration);
            markup.wrapper.fade_in(now, duration);
        }
        self.markers.insert(Marker::Open);

        let generation = self.generation;
        let look_ahead = self.look_ahead(index + 1).unwrap_or_else(Task::none);

        if let Some(image) = self.take_buffered(index) {
            log::debug!("image {index} served by the look-ahead");
            let reveal = self.handle_preloaded(generation, index, LoadOutcome::Loaded(image));
            return (effect, Task::batch([reveal, look_ahead]));
        }

        self.preload_requests += 1;
        let ticket = self.loader_timer.arm();
        let loader_delay = Task::perform(
            async move {
                tokio::time::sleep(duration).await;
                ticket
            },
            Message::LoaderDelayElapsed,
        );

        let preload = Task::perform(self.preloader.preload(src), move |outcome| {
            Message::Preloaded {
                generation,
                index,
                outcome,
            }
        });

        (effect, Task::batch([loader_delay, preload, look_ahead]))
    }

    /// Background preload of `index`, unless it is buffered, cached or in
    /// flight.
    fn look_ahead(&mut self, index: usize) -> Option<Task<Message>> {
        let src = self.catalog.get(index).map(|image| image.src.clone())?;
        let buffered = self.buffered.as_ref().is_some_and(|(slot, _)| *slot == index);
        if buffered || self.prefetching.contains(&index) || self.preloader.is_cached(&src) {
            return None;
        }

        self.prefetching.insert(index);
        Some(Task::perform(self.preloader.preload(src), move |outcome| {
            Message::Prefetched { index, outcome }
        }))
    }

    fn take_buffered(&mut self, index: usize) -> Option<LoadedImage> {
        match self.buffered.take() {
            Some((slot, image)) if slot == index => Some(image),
            other => {
                self.buffered = other;
                None
            }
        }
    }

    fn handle_preloaded(
        &mut self,
        generation: u64,
        index: usize,
        outcome: LoadOutcome,
    ) -> Task<Message> {
        if let Some(dimensions) = outcome.dimensions() {
            self.catalog.record_dimensions(index, dimensions);
        }
        if generation != self.generation {
            log::debug!("discarding stale preload of image {index} (generation {generation})");
            return Task::none();
        }

        self.loader_timer.cancel();
        let now = self.clock();
        self.refresh_chrome();
        self.refit(Duration::ZERO);

        let image = outcome.into_image();
        let loader_visible = self
            .markup
            .as_ref()
            .is_some_and(|markup| markup.loader.is_visible(now));

        if loader_visible {
            if let Some(markup) = self.markup.as_mut() {
                markup.loader.fade_out(now, LOADER_FADE_OUT);
            }
            Task::perform(
                async move {
                    tokio::time::sleep(LOADER_FADE_OUT).await;
                    image
                },
                move |image| Message::LoaderHidden {
                    generation,
                    index,
                    image,
                },
            )
        } else {
            self.appear(index, image);
            Task::none()
        }
    }

    /// Swaps the image in and finishes the loading sequence.
    fn appear(&mut self, index: usize, image: Option<LoadedImage>) {
        let src = self.catalog.get(index).map(|image| image.src.clone());
        if let Some(markup) = self.markup.as_mut() {
            markup.image.src = src;
            markup.image.handle = image.map(|image| image.handle);
        }
        self.phase = Phase::Displayed(index);
        self.refresh_zoomable();
        log::debug!("image {index} displayed");
        (self.hooks.after_image_load)(index);
    }

    fn change(&mut self, step: isize) -> (Effect, Task<Message>) {
        let Some(current) = self.current else {
            return (Effect::None, Task::none());
        };
        self.zoom_out(Some(Duration::ZERO));
        self.refresh_zoomable();

        let Some(last) = self.catalog.last_index() else {
            return (Effect::None, Task::none());
        };
        match navigation::resolve_target(current, last, step, self.options.looping) {
            Some(target) => self.load(target),
            None => (Effect::None, Task::none()),
        }
    }

    fn toggle_fullscreen(&mut self) -> Effect {
        if self.fullscreen.exit() {
            Effect::ExitFullscreen
        } else if self.fullscreen.try_enter() {
            Effect::EnterFullscreen
        } else {
            Effect::None
        }
    }

    fn dispatch(&mut self, target: Target, trigger: Trigger) -> (Effect, Task<Message>) {
        let Some(action) = self.listeners.resolve(target, trigger) else {
            return (Effect::None, Task::none());
        };

        match action {
            Action::Open(index) => self.open(index),
            Action::Change(step) => self.change(step),
            Action::Close => self.close(),
            Action::ToggleFullscreen => (self.toggle_fullscreen(), Task::none()),
            Action::ToggleZoom => {
                let pointer = self.pointer.map(|p| p - self.origin());
                match pointer {
                    Some(local)
                        if self.markers.contains(&Marker::Zoomable) && !self.is_zoomed() =>
                    {
                        self.zoom_in(local);
                    }
                    _ => {
                        self.zoom_out(None);
                    }
                }
                (Effect::None, Task::none())
            }
            Action::ZoomOut => {
                self.zoom_out(None);
                (Effect::None, Task::none())
            }
            Action::Pan => {
                self.pan();
                (Effect::None, Task::none())
            }
            Action::Resize => {
                let ticket = self.resize_timer.arm();
                let settle = Task::perform(
                    async move {
                        tokio::time::sleep(RESIZE_DEBOUNCE).await;
                        ticket
                    },
                    Message::ResizeSettled,
                );
                (Effect::None, settle)
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                let nav = match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => NavKey::Left,
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => NavKey::Right,
                    keyboard::Key::Named(keyboard::key::Named::Escape) => NavKey::Escape,
                    _ => return (Effect::None, Task::none()),
                };
                self.dispatch(Target::Key(nav), Trigger::KeyDown)
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.pointer = Some(position);
                self.dispatch(Target::Wrapper, Trigger::PointerMove)
            }
            event::Event::Window(
                window::Event::Resized(size) | window::Event::Opened { size, .. },
            ) if self.options.container.is_window() => (
                Effect::None,
                self.handle_resize(Rectangle::new(Point::ORIGIN, size)),
            ),
            _ => (Effect::None, Task::none()),
        }
    }

    /// Applies new container bounds. Once the viewer is initialized and
    /// measured, the resize binding debounces them.
    fn handle_resize(&mut self, bounds: Rectangle) -> Task<Message> {
        self.pending_container = Some(bounds);
        let measured = self.container.width > 0.0 && self.container.height > 0.0;

        if self.initialized && measured {
            let (_, task) = self.dispatch(Target::Container, Trigger::Resize);
            return task;
        }

        self.settle_resize(Duration::ZERO);
        Task::none()
    }

    /// Moves to the pending container bounds and re-fits over `duration`.
    fn settle_resize(&mut self, duration: Duration) {
        let Some(bounds) = self.pending_container.take() else {
            return;
        };
        self.clock();
        self.container = bounds;
        if self.current.is_some() {
            self.refit(duration);
            self.refresh_chrome();
            self.refresh_zoomable();
        }
    }

    fn pan(&mut self) {
        if !self.zoom.is_zoomed() {
            return;
        }
        let now = self.now;
        if self
            .markup
            .as_ref()
            .is_some_and(|markup| markup.image.margin.is_animating(now))
        {
            return;
        }
        if let Some(pointer) = self.pointer {
            self.pan_to(pointer - self.origin(), Duration::ZERO);
        }
    }

    /// Moves the pan margin for a pointer at `local` container coordinates.
    fn pan_to(&mut self, local: Point, duration: Duration) {
        let Some(dimensions) = self.current_dimensions() else {
            return;
        };
        let canvas = self.container.size();
        let pointer = Vector::new(local.x - canvas.width / 2.0, local.y - canvas.height / 2.0);
        let margin = zoom::pan_margin(
            pointer,
            canvas,
            dimensions,
            &self.hooks.zoomed_padding_x,
            &self.hooks.zoomed_padding_y,
        );

        let now = self.now;
        if let Some(markup) = self.markup.as_mut() {
            markup.image.margin.animate_to(now, margin, duration);
        }
    }

    fn current_dimensions(&self) -> Option<Dimensions> {
        self.current
            .and_then(|index| self.catalog.get(index))
            .and_then(ImageDescriptor::dimensions)
    }

    fn refit(&mut self, duration: Duration) {
        if self.current.is_none() {
            return;
        }
        let dimensions = self.current_dimensions();
        let container = self.container.size();
        let mode = self.sizing_mode;
        let now = self.now;

        if let Some(markup) = self.markup.as_mut() {
            let geometry = fit(dimensions, container, markup.outer_margins(), mode);
            markup.content.animate_to(now, geometry, duration);
        }
    }

    /// Updates description, pagination and arrows for the current image.
    fn refresh_chrome(&mut self) {
        let (Some(current), Some(last)) = (self.current, self.catalog.last_index()) else {
            return;
        };
        let Some(markup) = self.markup.as_mut() else {
            return;
        };

        markup.description = self
            .catalog
            .get(current)
            .and_then(|image| image.title.clone())
            .unwrap_or_default();
        markup.pagination = navigation::pagination(current, last, &self.options.separator);

        let arrows = navigation::arrows(
            current,
            last,
            self.options.looping,
            self.options.link_images,
        );
        markup.left.active = arrows.left;
        markup.right.active = arrows.right;
    }

    fn refresh_zoomable(&mut self) {
        let zoomable = self.is_zoomable();
        if self.initialized {
            self.markers.toggle(Marker::Zoomable, zoomable);
        }
    }

    /// Larger than the container on some axis and not already upscaled.
    #[allow(clippy::cast_precision_loss)]
    fn is_zoomable(&self) -> bool {
        if !self.options.enable_zoom {
            return false;
        }
        let (Some(dimensions), Some(markup)) = (self.current_dimensions(), self.markup.as_ref())
        else {
            return false;
        };

        let natural_width = dimensions.width as f32;
        let natural_height = dimensions.height as f32;
        let overflows =
            natural_width > self.container.width || natural_height > self.container.height;

        let rendered = markup.content.target();
        let stretched = rendered.width > natural_width + STRETCH_TOLERANCE
            || rendered.height > natural_height + STRETCH_TOLERANCE;

        overflows && !stretched
    }
}
