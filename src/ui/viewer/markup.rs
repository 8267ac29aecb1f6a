// SPDX-License-Identifier: MPL-2.0
//! The viewer's constructed element tree and the container state markers.
//!
//! [`Markup`] is built on first open and dropped by `destroy`. Its parts are
//! plain state that the view renders: fadeable layers, the animated content
//! box, the image slot and the text of the bars.

use crate::ui::design_tokens::sizing;
use crate::ui::viewer::animation::Tween;
use crate::ui::viewer::fit::{Geometry, Margins};
use iced::widget::image;
use iced::Vector;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Logical names of the parts of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementName {
    Container,
    Wrapper,
    Overlay,
    Loader,
    Content,
    Image,
    Top,
    Left,
    Right,
    Bottom,
    Close,
    Fullscreen,
    Description,
    Pagination,
    SetTitle,
}

impl ElementName {
    pub const ALL: [ElementName; 15] = [
        ElementName::Container,
        ElementName::Wrapper,
        ElementName::Overlay,
        ElementName::Loader,
        ElementName::Content,
        ElementName::Image,
        ElementName::Top,
        ElementName::Left,
        ElementName::Right,
        ElementName::Bottom,
        ElementName::Close,
        ElementName::Fullscreen,
        ElementName::Description,
        ElementName::Pagination,
        ElementName::SetTitle,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ElementName::Container => "container",
            ElementName::Wrapper => "wrapper",
            ElementName::Overlay => "overlay",
            ElementName::Loader => "loader",
            ElementName::Content => "content",
            ElementName::Image => "img",
            ElementName::Top => "top",
            ElementName::Left => "left",
            ElementName::Right => "right",
            ElementName::Bottom => "bottom",
            ElementName::Close => "close",
            ElementName::Fullscreen => "fullscreen",
            ElementName::Description => "description",
            ElementName::Pagination => "pagination",
            ElementName::SetTitle => "setTitle",
        }
    }
}

impl FromStr for ElementName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(())
    }
}

/// A part that fades in and out.
#[derive(Debug, Clone, Copy)]
pub struct Layer {
    opacity: Tween<f32>,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            opacity: Tween::settled(0.0),
        }
    }
}

impl Layer {
    pub fn fade_in(&mut self, now: Instant, duration: Duration) {
        self.opacity.animate_to(now, 1.0, duration);
    }

    pub fn fade_out(&mut self, now: Instant, duration: Duration) {
        self.opacity.animate_to(now, 0.0, duration);
    }

    /// Opacity shown at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.opacity.value_at(now)
    }

    /// Whether the layer is shown or heading towards being shown.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.opacity.target() > 0.0 || self.opacity.value_at(now) > 0.0
    }

    /// Whether a fade in either direction is running.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.opacity.is_animating(now)
    }
}

/// The `img` part: which source it shows and how far it is panned.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    pub src: Option<String>,
    pub handle: Option<image::Handle>,
    pub margin: Tween<Vector>,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self {
            src: None,
            handle: None,
            margin: Tween::settled(Vector::ZERO),
        }
    }
}

/// A navigation arrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arrow {
    pub active: bool,
}

/// The constructed viewer tree.
#[derive(Debug, Clone)]
pub struct Markup {
    pub id: String,
    pub wrapper: Layer,
    pub overlay: Layer,
    pub loader: Layer,
    pub content: Tween<Geometry>,
    pub image: ImageSlot,
    pub left: Arrow,
    pub right: Arrow,
    pub description: String,
    pub pagination: String,
    pub set_title: String,
    /// Loader spinner angle in radians.
    pub spinner_rotation: f32,
}

impl Markup {
    /// Builds an empty, fully hidden tree for the gallery `set_index`.
    #[must_use]
    pub fn new(set_index: u32, set_title: String) -> Self {
        Self {
            id: format!("lightbox-content-{set_index}"),
            wrapper: Layer::default(),
            overlay: Layer::default(),
            loader: Layer::default(),
            content: Tween::settled(Geometry::default()),
            image: ImageSlot::default(),
            left: Arrow::default(),
            right: Arrow::default(),
            description: String::new(),
            pagination: String::new(),
            set_title,
            spinner_rotation: 0.0,
        }
    }

    /// Space taken by the arrows and the bars, subtracted before fitting.
    #[must_use]
    pub fn outer_margins(&self) -> Margins {
        Margins::new(
            sizing::ARROW_WIDTH * 2.0,
            sizing::TOP_BAR_HEIGHT + sizing::BOTTOM_BAR_HEIGHT,
        )
    }

    /// Whether any part is mid-transition at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.wrapper.is_fading(now)
            || self.overlay.is_fading(now)
            || self.loader.is_fading(now)
            || self.content.is_animating(now)
            || self.image.margin.is_animating(now)
    }
}

/// A state marker on the viewer's container.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    Open,
    InContainer,
    Cover,
    Zoomable,
    Zoomed,
    /// The host's extra class.
    Custom(String),
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Open => f.write_str("lightbox-open"),
            Marker::InContainer => f.write_str("lightbox-in-container"),
            Marker::Cover => f.write_str("lightbox-cover"),
            Marker::Zoomable => f.write_str("lightbox-zoomable"),
            Marker::Zoomed => f.write_str("lightbox-zoomed"),
            Marker::Custom(class) => f.write_str(class),
        }
    }
}

/// Set of markers currently on the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers(BTreeSet<Marker>);

impl Markers {
    pub fn insert(&mut self, marker: Marker) {
        self.0.insert(marker);
    }

    pub fn remove(&mut self, marker: &Marker) {
        self.0.remove(marker);
    }

    /// Inserts or removes `marker` depending on `on`.
    pub fn toggle(&mut self, marker: Marker, on: bool) {
        if on {
            self.insert(marker);
        } else {
            self.remove(&marker);
        }
    }

    /// Drops the host's extra class, if any.
    pub fn remove_custom(&mut self) {
        self.0.retain(|marker| !matches!(marker, Marker::Custom(_)));
    }

    #[must_use]
    pub fn contains(&self, marker: &Marker) -> bool {
        self.0.contains(marker)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.0.iter()
    }
}

/// Borrowed view of one part, as returned by `element(name)`.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    Container(&'a Markers),
    Layer(&'a Layer),
    Content(&'a Tween<Geometry>),
    Image(&'a ImageSlot),
    Arrow(&'a Arrow),
    Text(&'a str),
    /// Bars and buttons, which carry no state of their own.
    Chrome(ElementName),
}

impl Markup {
    /// Looks up a part by name.
    #[must_use]
    pub fn element<'a>(&'a self, name: ElementName, markers: &'a Markers) -> ElementRef<'a> {
        match name {
            ElementName::Container => ElementRef::Container(markers),
            ElementName::Wrapper => ElementRef::Layer(&self.wrapper),
            ElementName::Overlay => ElementRef::Layer(&self.overlay),
            ElementName::Loader => ElementRef::Layer(&self.loader),
            ElementName::Content => ElementRef::Content(&self.content),
            ElementName::Image => ElementRef::Image(&self.image),
            ElementName::Left => ElementRef::Arrow(&self.left),
            ElementName::Right => ElementRef::Arrow(&self.right),
            ElementName::Description => ElementRef::Text(&self.description),
            ElementName::Pagination => ElementRef::Text(&self.pagination),
            ElementName::SetTitle => ElementRef::Text(&self.set_title),
            ElementName::Top
            | ElementName::Bottom
            | ElementName::Close
            | ElementName::Fullscreen => ElementRef::Chrome(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_names_parse_back() {
        for name in ElementName::ALL {
            assert_eq!(name.as_str().parse::<ElementName>(), Ok(name));
        }
        assert!("sidebar".parse::<ElementName>().is_err());
    }

    #[test]
    fn new_markup_is_hidden() {
        let markup = Markup::new(2, "Trip".into());
        let now = Instant::now();

        assert_eq!(markup.id, "lightbox-content-2");
        assert!(!markup.wrapper.is_visible(now));
        assert!(!markup.loader.is_visible(now));
        assert!(markup.image.src.is_none());
        assert!(!markup.is_animating(now));
    }

    #[test]
    fn layer_fades_out_to_invisible() {
        let start = Instant::now();
        let mut layer = Layer::default();
        layer.fade_in(start, Duration::ZERO);
        assert!(layer.is_visible(start));

        layer.fade_out(start, Duration::from_millis(200));
        assert!(layer.is_visible(start), "still fading");
        assert!(!layer.is_visible(start + Duration::from_millis(200)));
    }

    #[test]
    fn outer_margins_cover_arrows_and_bars() {
        let margins = Markup::new(0, String::new()).outer_margins();
        assert_eq!(margins.horizontal, 100.0);
        assert_eq!(margins.vertical, 90.0);
    }

    #[test]
    fn markers_toggle() {
        let mut markers = Markers::default();
        markers.toggle(Marker::Zoomable, true);
        markers.insert(Marker::Custom("dark".into()));
        assert!(markers.contains(&Marker::Zoomable));

        markers.toggle(Marker::Zoomable, false);
        assert!(!markers.contains(&Marker::Zoomable));
        assert_eq!(
            markers.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["dark".to_string()]
        );
    }
}
