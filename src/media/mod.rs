// SPDX-License-Identifier: MPL-2.0
//! Image loading: resolving sources, decoding pixels and caching them.

pub mod prefetch;
pub mod preload;

pub use prefetch::{Budget, PrefetchCache};
pub use preload::Preloader;

use crate::catalog::Dimensions;
use crate::error::LoadError;
use iced::widget::image;
use std::path::PathBuf;

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Creates a `LoadedImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Memory footprint of the RGBA pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Settled result of a preload. A preload never fails as a future; a broken
/// image resolves to [`LoadOutcome::Failed`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded(LoadedImage),
    Failed(LoadError),
}

impl LoadOutcome {
    /// Natural dimensions, when the load succeeded.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        match self {
            LoadOutcome::Loaded(image) => Some(image.dimensions()),
            LoadOutcome::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn into_image(self) -> Option<LoadedImage> {
        match self {
            LoadOutcome::Loaded(image) => Some(image),
            LoadOutcome::Failed(_) => None,
        }
    }
}

/// Where an image source points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    /// `http(s)://` sources are remote; `file://` and bare paths are local.
    #[must_use]
    pub fn parse(src: &str) -> Self {
        let lower = src.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSource::Remote(src.to_string())
        } else if lower.starts_with("file://") {
            ImageSource::Local(PathBuf::from(&src["file://".len()..]))
        } else {
            ImageSource::Local(PathBuf::from(src))
        }
    }
}

/// Decodes encoded bytes (PNG, JPEG, ...) into RGBA pixels.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] when the bytes are not a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_classification() {
        assert_eq!(
            ImageSource::parse("https://example.org/a.jpg"),
            ImageSource::Remote("https://example.org/a.jpg".into())
        );
        assert_eq!(
            ImageSource::parse("HTTP://example.org/a.jpg"),
            ImageSource::Remote("HTTP://example.org/a.jpg".into())
        );
        assert_eq!(
            ImageSource::parse("file:///tmp/a.png"),
            ImageSource::Local(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ImageSource::parse("photos/a.png"),
            ImageSource::Local(PathBuf::from("photos/a.png"))
        );
    }

    #[test]
    fn decode_bytes_rejects_garbage() {
        let result = decode_bytes(b"definitely not an image");
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn decode_bytes_reads_png() {
        let mut encoded = std::io::Cursor::new(Vec::new());
        image_rs::RgbaImage::new(7, 3)
            .write_to(&mut encoded, image_rs::ImageFormat::Png)
            .expect("encode png");

        let image = decode_bytes(encoded.get_ref()).expect("decodes");
        assert_eq!(image.dimensions(), Dimensions::new(7, 3));
        assert_eq!(image.size_bytes(), 7 * 3 * 4);
    }

    #[test]
    fn failed_outcome_has_no_dimensions() {
        let outcome = LoadOutcome::Failed(LoadError::Io("missing".into()));
        assert!(outcome.dimensions().is_none());
        assert!(outcome.into_image().is_none());
    }
}
