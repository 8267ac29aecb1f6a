// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The lightbox follows the Elm-style "state down, messages up" pattern: the
//! [`viewer`] component owns its state, returns [`iced::Task`]s for async
//! work and reports window-level side effects to the host.
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pure state pieces (navigation, timers, zoom)
//! - [`listeners`] - Input bindings of the viewer
//! - [`fullscreen`] - Fullscreen capability
//! - [`widgets`] - Canvas widgets (content area, loader spinner)
//! - [`styles`] - Centralized styling (buttons, bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod fullscreen;
pub mod listeners;
pub mod state;
pub mod styles;
pub mod viewer;
pub mod widgets;
