// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! Geometry is computed in `f32`, so layout tests compare with the `approx`
//! macros rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for pixel values produced by the fit engine.
pub const PIXEL_EPSILON: f32 = 1e-3;
