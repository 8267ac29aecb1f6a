// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! Zooming switches the active sizing mode to [`SizingMode::Native`] and
//! remembers the mode it replaced. While zoomed, pointer movement pans the
//! image so that the side the pointer leans towards comes into view.

use crate::catalog::Dimensions;
use crate::config::{PaddingFn, SizingMode};
use iced::{Size, Vector};

/// Zoom flag and the sizing mode to restore on zoom-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoomState {
    base_mode: Option<SizingMode>,
}

impl ZoomState {
    /// Enters zoom, saving `current` as the mode to restore.
    ///
    /// Returns `false` if already zoomed; the saved mode is kept.
    pub fn enter(&mut self, current: SizingMode) -> bool {
        if self.base_mode.is_some() {
            return false;
        }
        self.base_mode = Some(current);
        true
    }

    /// Leaves zoom and returns the saved mode, or `None` if not zoomed.
    pub fn exit(&mut self) -> Option<SizingMode> {
        self.base_mode.take()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.base_mode.is_some()
    }

    #[must_use]
    pub fn base_mode(&self) -> Option<SizingMode> {
        self.base_mode
    }

    /// Replaces the mode restored on zoom-out. Ignored when not zoomed.
    pub fn rebase(&mut self, mode: SizingMode) {
        if let Some(base) = self.base_mode.as_mut() {
            *base = mode;
        }
    }

    pub fn reset(&mut self) {
        self.base_mode = None;
    }
}

/// Computes the pan margin of a zoomed image.
///
/// `pointer` is the pointer position relative to the center of the
/// `canvas`. On an axis where the image overflows the canvas, the offset
/// grows linearly from the center to `overflow / 2 + padding` at the canvas
/// edge; the returned margin is its negation. Axes that fit yield zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pan_margin(
    pointer: Vector,
    canvas: Size,
    image: Dimensions,
    padding_x: &PaddingFn,
    padding_y: &PaddingFn,
) -> Vector {
    let axis = |pointer: f32, visible: f32, natural: u32, padding: &PaddingFn| {
        let natural = natural as f32;
        if visible <= 0.0 || natural <= visible {
            return 0.0;
        }
        let reach = (natural - visible) / 2.0 + padding(natural, visible);
        -(pointer / (visible / 2.0)) * reach
    };

    Vector::new(
        axis(pointer.x, canvas.width, image.width, padding_x),
        axis(pointer.y, canvas.height, image.height, padding_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::sync::Arc;

    fn no_padding() -> PaddingFn {
        Arc::new(|_, _| 0.0)
    }

    #[test]
    fn enter_then_exit_restores_base_mode() {
        let mut zoom = ZoomState::default();
        assert!(zoom.enter(SizingMode::Cover));
        assert!(zoom.is_zoomed());
        assert!(!zoom.enter(SizingMode::Native), "second enter is refused");

        assert_eq!(zoom.exit(), Some(SizingMode::Cover));
        assert!(!zoom.is_zoomed());
        assert_eq!(zoom.exit(), None);
    }

    #[test]
    fn rebase_only_applies_while_zoomed() {
        let mut zoom = ZoomState::default();
        zoom.rebase(SizingMode::Contain);
        assert_eq!(zoom.base_mode(), None);

        zoom.enter(SizingMode::Default);
        zoom.rebase(SizingMode::Contain);
        assert_eq!(zoom.exit(), Some(SizingMode::Contain));
    }

    #[test]
    fn pointer_at_center_does_not_pan() {
        let margin = pan_margin(
            Vector::new(0.0, 0.0),
            Size::new(800.0, 600.0),
            Dimensions::new(2000, 1600),
            &no_padding(),
            &no_padding(),
        );
        assert_abs_diff_eq!(margin.x, 0.0);
        assert_abs_diff_eq!(margin.y, 0.0);
    }

    #[test]
    fn pointer_at_edge_reveals_half_the_overflow() {
        // right edge, halfway down
        let margin = pan_margin(
            Vector::new(400.0, 150.0),
            Size::new(800.0, 600.0),
            Dimensions::new(2000, 1600),
            &no_padding(),
            &no_padding(),
        );
        assert_abs_diff_eq!(margin.x, -600.0);
        assert_abs_diff_eq!(margin.y, -250.0);
    }

    #[test]
    fn fitting_axis_never_pans() {
        let margin = pan_margin(
            Vector::new(-400.0, 300.0),
            Size::new(800.0, 600.0),
            Dimensions::new(2000, 500),
            &no_padding(),
            &no_padding(),
        );
        assert_abs_diff_eq!(margin.x, 600.0);
        assert_abs_diff_eq!(margin.y, 0.0);
    }

    #[test]
    fn padding_extends_reach() {
        let padding: PaddingFn = Arc::new(|image, canvas| (image - canvas) / 4.0);
        let margin = pan_margin(
            Vector::new(400.0, 0.0),
            Size::new(800.0, 600.0),
            Dimensions::new(1600, 1200),
            &padding,
            &no_padding(),
        );
        // overflow/2 = 400, padding = 200
        assert_abs_diff_eq!(margin.x, -600.0);
    }
}
