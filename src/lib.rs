// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an in-window image lightbox built with the Iced GUI framework.
//!
//! It discovers images from a gallery of thumbnails, preloads them
//! asynchronously, fits them to the window with several sizing modes and
//! supports keyboard navigation, fullscreen and a pointer-driven zoom.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
