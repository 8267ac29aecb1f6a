// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the lightbox. Constants are organized by category.

use std::time::Duration;

// ==========================================================================
// Option Defaults
// ==========================================================================

/// Default selector picking the thumbnails that open the lightbox.
pub const DEFAULT_IMAGE_SELECTOR: &str = ".lightbox-image";

/// Default thumbnail attribute holding the full-size image URL.
pub const DEFAULT_IMAGE_SOURCE: &str = "href";

/// Default separator between position and total in the pagination text.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default transition duration in milliseconds (reveal fade, loader delay,
/// zoom and resize transitions).
pub const DEFAULT_DURATION_MS: u64 = 300;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Loader spinner fade-in once the loader-delay timer fires.
pub const LOADER_FADE_IN: Duration = Duration::from_millis(400);

/// Loader spinner fade-out preceding the image swap.
pub const LOADER_FADE_OUT: Duration = Duration::from_millis(300);

/// Fade-out applied to overlay, loader and wrapper on close.
pub const CLOSE_FADE: Duration = Duration::from_millis(200);

/// Window of the resize debounce; bursts inside it coalesce into one re-fit.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Frame interval of the animation tick subscription (~60 FPS).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Prefetch Cache Defaults
// ==========================================================================

/// Default prefetch cache size in bytes (64 MB).
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Default maximum number of decoded images kept around.
pub const DEFAULT_PREFETCH_MAX_IMAGES: usize = 8;

/// Lower bound for the prefetch entry count.
pub const MIN_PREFETCH_MAX_IMAGES: usize = 2;

/// Upper bound for the prefetch entry count.
pub const MAX_PREFETCH_MAX_IMAGES: usize = 64;
