// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets of the lightbox.

pub mod content_canvas;
pub mod loader_spinner;

pub use content_canvas::ContentCanvas;
pub use loader_spinner::LoaderSpinner;
