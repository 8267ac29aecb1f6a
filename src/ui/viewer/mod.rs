// SPDX-License-Identifier: MPL-2.0
//! The lightbox viewer: state machine, layout and rendering.
//!
//! [`component::State`] is the entry point. [`fit`] and [`animation`] are
//! pure and usable on their own; [`markup`] holds the element tree the view
//! renders.

pub mod animation;
pub mod component;
pub mod fit;
pub mod markup;
mod view;

pub use component::{Effect, Message, Phase, State};
pub use fit::{fit, Geometry, Margins};
pub use markup::{ElementName, ElementRef, Marker, Markers};
