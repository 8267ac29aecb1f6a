// SPDX-License-Identifier: MPL-2.0
//! Host callbacks: lifecycle notifications and zoom padding.

use std::fmt;
use std::sync::Arc;

/// Called without arguments at a lifecycle point.
pub type LifecycleHook = Arc<dyn Fn() + Send + Sync>;

/// Called with the index of the image that was just revealed.
pub type ImageHook = Arc<dyn Fn(usize) + Send + Sync>;

/// Extra zoom padding for one axis: `(image_extent, canvas_extent) -> pixels`.
pub type PaddingFn = Arc<dyn Fn(f32, f32) -> f32 + Send + Sync>;

/// Callbacks a host attaches to the lightbox. Every hook defaults to a no-op
/// and both paddings default to zero.
#[derive(Clone)]
pub struct Hooks {
    pub after_initialize: LifecycleHook,
    pub after_markup: LifecycleHook,
    pub after_image_load: ImageHook,
    pub zoomed_padding_x: PaddingFn,
    pub zoomed_padding_y: PaddingFn,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            after_initialize: Arc::new(|| {}),
            after_markup: Arc::new(|| {}),
            after_image_load: Arc::new(|_| {}),
            zoomed_padding_x: Arc::new(|_, _| 0.0),
            zoomed_padding_y: Arc::new(|_, _| 0.0),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

impl Hooks {
    #[must_use]
    pub fn after_initialize(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.after_initialize = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn after_markup(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.after_markup = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn after_image_load(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.after_image_load = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn zoomed_padding_x(mut self, padding: impl Fn(f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        self.zoomed_padding_x = Arc::new(padding);
        self
    }

    #[must_use]
    pub fn zoomed_padding_y(mut self, padding: impl Fn(f32, f32) -> f32 + Send + Sync + 'static) -> Self {
        self.zoomed_padding_y = Arc::new(padding);
        self
    }
}
