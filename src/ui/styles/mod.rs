// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the lightbox chrome and the demo gallery.

pub mod button;
pub mod overlay;

pub use button::{arrow as button_arrow, overlay as button_overlay};
