// SPDX-License-Identifier: MPL-2.0
//! Image catalog: the ordered list of images a gallery exposes to the viewer.
//!
//! The catalog is built once from the host's thumbnails and only grows
//! afterwards, so indices stay stable for the lifetime of a viewer. Natural
//! dimensions are unknown until the first successful load and are never
//! re-measured once recorded.

use std::collections::BTreeMap;

/// Natural pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A host element that may open the lightbox when activated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl Thumbnail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a thumbnail linking to `href` with the default class.
    #[must_use]
    pub fn link(href: impl Into<String>) -> Self {
        Self::new()
            .with_class("lightbox-image")
            .with_attribute("href", href)
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_attribute("title", title)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The subset of selector syntax thumbnails are matched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `*`
    Any,
    /// `.name`
    Class(String),
    /// `[name]`
    Attribute(String),
}

impl Selector {
    /// Parses `*`, `.class` or `[attribute]`. A bare word is read as a class.
    #[must_use]
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector == "*" {
            Selector::Any
        } else if let Some(class) = selector.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else if let Some(attr) = selector
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Selector::Attribute(attr.trim().to_string())
        } else {
            Selector::Class(selector.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, thumbnail: &Thumbnail) -> bool {
        match self {
            Selector::Any => true,
            Selector::Class(class) => thumbnail.has_class(class),
            Selector::Attribute(name) => thumbnail.attribute(name).is_some(),
        }
    }
}

/// The host container: an optional gallery title and its thumbnails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    pub title: Option<String>,
    pub thumbnails: Vec<Thumbnail>,
}

impl Gallery {
    #[must_use]
    pub fn new(thumbnails: Vec<Thumbnail>) -> Self {
        Self {
            title: None,
            thumbnails,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Catalog entry for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub title: Option<String>,
    pub src: String,
    dimensions: Option<Dimensions>,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(src: impl Into<String>, title: Option<String>) -> Self {
        Self {
            title,
            src: src.into(),
            dimensions: None,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// Records natural dimensions on first measurement. Returns whether the
    /// value was stored; later measurements are ignored.
    pub fn record_dimensions(&mut self, dimensions: Dimensions) -> bool {
        if self.dimensions.is_some() {
            return false;
        }
        self.dimensions = Some(dimensions);
        true
    }
}

/// Ordered, append-only list of image descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageDescriptor>,
}

/// Result of discovering images in a gallery.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub catalog: Catalog,
    /// `(thumbnail position, catalog index)` for every participating thumbnail.
    pub bindings: Vec<(usize, usize)>,
}

impl Catalog {
    /// Builds a catalog from the thumbnails matching `selector`, reading
    /// each URL from `source_attribute` in gallery order.
    #[must_use]
    pub fn discover(gallery: &Gallery, selector: &str, source_attribute: &str) -> Discovery {
        let selector = Selector::parse(selector);
        let mut discovery = Discovery::default();

        for (position, thumbnail) in gallery.thumbnails.iter().enumerate() {
            if !selector.matches(thumbnail) {
                continue;
            }
            match Self::describe(thumbnail, source_attribute) {
                Some(descriptor) => {
                    let index = discovery.catalog.push(descriptor);
                    discovery.bindings.push((position, index));
                }
                None => log::warn!(
                    "thumbnail {position} has no '{source_attribute}' attribute, skipping"
                ),
            }
        }

        discovery
    }

    /// Turns a thumbnail into a descriptor, if it carries a source URL.
    #[must_use]
    pub fn describe(thumbnail: &Thumbnail, source_attribute: &str) -> Option<ImageDescriptor> {
        let src = thumbnail.attribute(source_attribute)?;
        let title = thumbnail.attribute("title").map(str::to_string);
        Some(ImageDescriptor::new(src, title))
    }

    /// Appends a descriptor and returns its index.
    pub fn push(&mut self, descriptor: ImageDescriptor) -> usize {
        self.images.push(descriptor);
        self.images.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }

    /// Records dimensions for `index`; see [`ImageDescriptor::record_dimensions`].
    pub fn record_dimensions(&mut self, index: usize, dimensions: Dimensions) -> bool {
        self.images
            .get_mut(index)
            .is_some_and(|image| image.record_dimensions(dimensions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Highest valid index, or `None` for an empty catalog.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.images.len().checked_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.images.iter()
    }
}
