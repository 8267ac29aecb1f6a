// SPDX-License-Identifier: MPL-2.0
//! Layout engine: where and how large the current image is drawn.
//!
//! [`fit`] is pure. It takes the natural size of an image, the size of the
//! viewer's content container, the space eaten by chrome and a sizing mode,
//! and returns a [`Geometry`] relative to the full container.
//!
//! Sizes are never negative. Offsets can be: `Cover` and `Native` let the
//! image overflow the container, in which case it is centered with negative
//! `top`/`left`.

use crate::catalog::Dimensions;
use crate::config::SizingMode;
use iced::{Rectangle, Size};
use std::fmt;

/// Displayed placement of an image inside the content container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
}

impl Geometry {
    /// The placement as a rectangle in container coordinates.
    #[must_use]
    pub fn rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.left,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Space consumed by chrome: arrows on the sides, bars on top and bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    /// Left plus right arrow widths.
    pub horizontal: f32,
    /// Top plus bottom bar heights.
    pub vertical: f32,
}

impl Margins {
    #[must_use]
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The margin-reduced ("global") box of `container`.
    #[must_use]
    pub fn shrink(&self, container: Size) -> Size {
        Size::new(
            (container.width - self.horizontal).max(0.0),
            (container.height - self.vertical).max(0.0),
        )
    }
}

/// An aspect ratio was requested from a zero-sized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateGeometry;

impl fmt::Display for DegenerateGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("image has a zero-length side")
    }
}

impl std::error::Error for DegenerateGeometry {}

/// Height over width, refusing zero-length sides.
fn ratio(width: f32, height: f32) -> Result<f32, DegenerateGeometry> {
    if width > 0.0 && height > 0.0 {
        Ok(height / width)
    } else {
        Err(DegenerateGeometry)
    }
}

/// Computes the displayed geometry of an image.
///
/// Unknown dimensions (the image never loaded) are handled like a
/// zero-sized image: the result has no area and sits at the center.
#[must_use]
#[allow(clippy::cast_precision_loss)] // image sides stay far below 2^24
pub fn fit(
    dimensions: Option<Dimensions>,
    container: Size,
    margins: Margins,
    mode: SizingMode,
) -> Geometry {
    if container.width <= 0.0 || container.height <= 0.0 {
        return Geometry::default();
    }

    let natural = dimensions.map_or(Size::ZERO, |d| {
        Size::new(d.width as f32, d.height as f32)
    });

    let size = scaled_size(natural, container, margins, mode).unwrap_or_else(|err| {
        log::debug!("fit falls back to natural size: {err}");
        natural
    });

    Geometry {
        width: size.width,
        height: size.height,
        top: (container.height - size.height) / 2.0,
        left: (container.width - size.width) / 2.0,
    }
}

fn scaled_size(
    natural: Size,
    container: Size,
    margins: Margins,
    mode: SizingMode,
) -> Result<Size, DegenerateGeometry> {
    match mode {
        SizingMode::Native => Ok(natural),
        SizingMode::Cover => {
            let image_ratio = ratio(natural.width, natural.height)?;
            let container_ratio = ratio(container.width, container.height)?;
            if image_ratio < container_ratio {
                Ok(Size::new(container.height / image_ratio, container.height))
            } else {
                Ok(Size::new(container.width, container.width * image_ratio))
            }
        }
        SizingMode::Contain | SizingMode::Default => {
            let image_ratio = ratio(natural.width, natural.height)?;
            let global = margins.shrink(container);
            let Ok(global_ratio) = ratio(global.width, global.height) else {
                // chrome leaves no room at all
                return Ok(Size::ZERO);
            };

            let fitted = if image_ratio > global_ratio {
                Size::new(global.height / image_ratio, global.height)
            } else {
                Size::new(global.width, global.width * image_ratio)
            };

            if mode == SizingMode::Default
                && (fitted.width >= natural.width || fitted.height >= natural.height)
            {
                Ok(natural)
            } else {
                Ok(fitted)
            }
        }
    }
}
