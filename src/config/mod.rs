// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox configuration: the option set a host
//! hands to the viewer, runtime access to individual options by name, and
//! loading/saving the options to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, OptionValue, Options};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut options = config::load().unwrap_or_default();
//!
//! // Modify a setting by name, as a host page would at runtime
//! options.set("loop", OptionValue::Bool(true)).expect("known option");
//!
//! // Save the modified configuration
//! config::save(&options).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&options, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert!(loaded.looping);
//! ```

pub mod defaults;
mod hooks;

pub use defaults::*;
pub use hooks::{Hooks, ImageHook, LifecycleHook, PaddingFn};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

/// Policy governing how an image is scaled into the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Fit inside the chrome-free box, never upscaling past native size.
    #[default]
    Default,
    /// Fit inside the chrome-free box, upscaling when needed.
    Contain,
    /// Cover the whole container, overflowing one axis.
    Cover,
    /// Natural pixel size. Also the transient mode while zoomed.
    Native,
}

impl SizingMode {
    pub const ALL: [SizingMode; 4] = [
        SizingMode::Default,
        SizingMode::Contain,
        SizingMode::Cover,
        SizingMode::Native,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizingMode::Default => "default",
            SizingMode::Contain => "contain",
            SizingMode::Cover => "cover",
            SizingMode::Native => "native",
        }
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SizingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown image size '{s}'")))
    }
}

/// Where the viewer is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerScope {
    /// The wrapper spans the whole window and follows window resizes.
    #[default]
    Window,
    /// The wrapper lives inside a host element whose bounds the host reports.
    Element(String),
}

impl ContainerScope {
    #[must_use]
    pub fn is_window(&self) -> bool {
        matches!(self, ContainerScope::Window)
    }
}

/// User-facing lightbox options. Everything here is plain data; callbacks
/// live in [`Hooks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub container: ContainerScope,
    pub image_selector: String,
    pub class_name: String,
    pub image_size: SizingMode,
    pub full_screen: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub link_images: bool,
    /// Transition duration in milliseconds.
    pub duration: u64,
    pub set_title: Option<String>,
    pub separator: String,
    pub enable_zoom: bool,
    pub image_source: String,
    /// Suffix of the wrapper id, distinguishing several galleries on one page.
    pub set_index: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container: ContainerScope::Window,
            image_selector: DEFAULT_IMAGE_SELECTOR.to_string(),
            class_name: String::new(),
            image_size: SizingMode::Default,
            full_screen: false,
            looping: false,
            link_images: true,
            duration: DEFAULT_DURATION_MS,
            set_title: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            enable_zoom: true,
            image_source: DEFAULT_IMAGE_SOURCE.to_string(),
            set_index: 0,
        }
    }
}

/// A single option value, as read or written through [`Options::get`] and
/// [`Options::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(u64),
    Text(String),
    Size(SizingMode),
    Scope(ContainerScope),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::Number(value) => write!(f, "{value}"),
            OptionValue::Text(value) => f.write_str(value),
            OptionValue::Size(mode) => write!(f, "{mode}"),
            OptionValue::Scope(ContainerScope::Window) => f.write_str("window"),
            OptionValue::Scope(ContainerScope::Element(id)) => write!(f, "#{id}"),
        }
    }
}

impl Options {
    /// Names accepted by [`Options::get`] and [`Options::set`].
    pub const NAMES: [&'static str; 13] = [
        "container",
        "image_selector",
        "class_name",
        "image_size",
        "full_screen",
        "loop",
        "link_images",
        "duration",
        "set_title",
        "separator",
        "enable_zoom",
        "image_source",
        "set_index",
    ];

    /// Transition duration as a [`Duration`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.duration)
    }

    /// Reads an option by its serialized name.
    ///
    /// `set_title` reads as an empty text when unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        let value = match name {
            "container" => OptionValue::Scope(self.container.clone()),
            "image_selector" => OptionValue::Text(self.image_selector.clone()),
            "class_name" => OptionValue::Text(self.class_name.clone()),
            "image_size" => OptionValue::Size(self.image_size),
            "full_screen" => OptionValue::Bool(self.full_screen),
            "loop" => OptionValue::Bool(self.looping),
            "link_images" => OptionValue::Bool(self.link_images),
            "duration" => OptionValue::Number(self.duration),
            "set_title" => OptionValue::Text(self.set_title.clone().unwrap_or_default()),
            "separator" => OptionValue::Text(self.separator.clone()),
            "enable_zoom" => OptionValue::Bool(self.enable_zoom),
            "image_source" => OptionValue::Text(self.image_source.clone()),
            "set_index" => OptionValue::Number(u64::from(self.set_index)),
            _ => return None,
        };
        Some(value)
    }

    /// Writes an option by its serialized name and returns the stored value.
    ///
    /// `image_size` also accepts its textual form (`"cover"`), and an empty
    /// `set_title` clears the title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unknown names and mismatched value types.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<OptionValue> {
        match (name, value) {
            ("container", OptionValue::Scope(scope)) => self.container = scope,
            ("image_selector", OptionValue::Text(text)) => self.image_selector = text,
            ("class_name", OptionValue::Text(text)) => self.class_name = text,
            ("image_size", OptionValue::Size(mode)) => self.image_size = mode,
            ("image_size", OptionValue::Text(text)) => self.image_size = text.parse()?,
            ("full_screen", OptionValue::Bool(flag)) => self.full_screen = flag,
            ("loop", OptionValue::Bool(flag)) => self.looping = flag,
            ("link_images", OptionValue::Bool(flag)) => self.link_images = flag,
            ("duration", OptionValue::Number(ms)) => self.duration = ms,
            ("set_title", OptionValue::Text(text)) => {
                self.set_title = Some(text).filter(|t| !t.is_empty());
            }
            ("separator", OptionValue::Text(text)) => self.separator = text,
            ("enable_zoom", OptionValue::Bool(flag)) => self.enable_zoom = flag,
            ("image_source", OptionValue::Text(text)) => self.image_source = text,
            ("set_index", OptionValue::Number(index)) => {
                self.set_index = u32::try_from(index)
                    .map_err(|_| Error::Config(format!("set_index {index} out of range")))?;
            }
            (name, value) if Self::NAMES.contains(&name) => {
                return Err(Error::Config(format!(
                    "option '{name}' does not accept value '{value}'"
                )));
            }
            (name, _) => return Err(Error::Config(format!("unknown option '{name}'"))),
        }
        self.get(name)
            .ok_or_else(|| Error::Config(format!("unknown option '{name}'")))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads options from the user configuration directory, falling back to
/// defaults when no file exists.
///
/// # Errors
///
/// Returns an error if the settings file exists but cannot be read.
pub fn load() -> Result<Options> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Options::default())
}

/// Saves options to the user configuration directory.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(options: &Options) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(options, &path);
    }
    Ok(())
}

/// Loads options from an explicit path. Malformed TOML yields defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Options> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(options) => Ok(options),
        Err(err) => {
            log::warn!("ignoring invalid settings in {}: {err}", path.display());
            Ok(Options::default())
        }
    }
}

/// Saves options to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(options: &Options, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(options)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_options() {
        let options = Options {
            container: ContainerScope::Element("gallery".into()),
            image_size: SizingMode::Cover,
            looping: true,
            duration: 150,
            set_title: Some("Holidays".into()),
            ..Options::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&options, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, options);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Options::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "loop = true\nimage_size = \"native\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.looping);
        assert_eq!(loaded.image_size, SizingMode::Native);
        assert_eq!(loaded.separator, DEFAULT_SEPARATOR);
        assert_eq!(loaded.duration, DEFAULT_DURATION_MS);
    }

    #[test]
    fn default_options_match_documented_defaults() {
        let options = Options::default();
        assert_eq!(options.image_selector, DEFAULT_IMAGE_SELECTOR);
        assert_eq!(options.image_source, "href");
        assert!(options.link_images);
        assert!(!options.looping);
        assert!(options.enable_zoom);
        assert_eq!(options.transition(), Duration::from_millis(300));
    }

    #[test]
    fn every_named_option_is_readable() {
        let options = Options::default();
        for name in Options::NAMES {
            assert!(options.get(name).is_some(), "missing option {name}");
        }
        assert!(options.get("currentImage").is_none());
    }

    #[test]
    fn set_writes_and_returns_value() {
        let mut options = Options::default();
        let stored = options
            .set("separator", OptionValue::Text("of".into()))
            .expect("separator is known");
        assert_eq!(stored, OptionValue::Text("of".into()));
        assert_eq!(options.separator, "of");

        options
            .set("image_size", OptionValue::Text("Contain".into()))
            .expect("text size parses");
        assert_eq!(options.image_size, SizingMode::Contain);
    }

    #[test]
    fn set_rejects_unknown_names_and_wrong_types() {
        let mut options = Options::default();
        assert!(matches!(
            options.set("speed", OptionValue::Number(3)),
            Err(Error::Config(msg)) if msg.contains("unknown")
        ));
        assert!(matches!(
            options.set("loop", OptionValue::Number(1)),
            Err(Error::Config(msg)) if msg.contains("does not accept")
        ));
        assert!(!options.looping);
    }

    #[test]
    fn empty_set_title_clears_it() {
        let mut options = Options {
            set_title: Some("Trip".into()),
            ..Options::default()
        };
        options
            .set("set_title", OptionValue::Text(String::new()))
            .expect("set_title is known");
        assert!(options.set_title.is_none());
    }

    #[test]
    fn sizing_mode_parses_case_insensitively() {
        assert_eq!("COVER".parse::<SizingMode>().ok(), Some(SizingMode::Cover));
        assert!("stretch".parse::<SizingMode>().is_err());
    }
}
