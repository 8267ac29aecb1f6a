// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::{self, Options, SizingMode};
use crate::error::{Error, Result};
use crate::ui::viewer::component;
use std::ffi::OsString;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
}

/// Runtime flags passed from `main` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub options: Options,
    /// Image paths or URLs, in gallery order.
    pub sources: Vec<String>,
}

impl Flags {
    /// Parses `--config <file> --loop --fullscreen --size <mode>` followed by
    /// image sources.
    ///
    /// Options come from `--config` when given, otherwise from the default
    /// settings file; the remaining flags override them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed flags and [`Error::Io`] when
    /// the config file cannot be read.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let config_path: Option<PathBuf> = args
            .opt_value_from_str("--config")
            .map_err(|err| Error::Config(err.to_string()))?;
        let looping = args.contains("--loop");
        let full_screen = args.contains("--fullscreen");
        let size: Option<SizingMode> = args
            .opt_value_from_str("--size")
            .map_err(|err| Error::Config(err.to_string()))?;

        let mut options = match config_path {
            Some(path) => config::load_from_path(&path)?,
            None => config::load()?,
        };
        options.looping |= looping;
        options.full_screen |= full_screen;
        if let Some(size) = size {
            options.image_size = size;
        }

        let sources = args
            .finish()
            .into_iter()
            .map(OsString::into_string)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|arg| {
                Error::Config(format!("argument is not valid UTF-8: {}", arg.to_string_lossy()))
            })?;

        Ok(Self { options, sources })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "separator = \"of\"\nimage_size = \"cover\"\n")
            .expect("write config");
        let path = path.to_string_lossy().into_owned();

        let flags = Flags::from_args(args(&[
            "--config",
            &path,
            "--loop",
            "--size",
            "contain",
            "a.png",
            "https://example.org/b.jpg",
        ]))
        .expect("flags parse");

        assert!(flags.options.looping);
        assert!(!flags.options.full_screen);
        assert_eq!(flags.options.separator, "of");
        assert_eq!(flags.options.image_size, SizingMode::Contain);
        assert_eq!(flags.sources, vec!["a.png", "https://example.org/b.jpg"]);
    }

    #[test]
    fn unknown_size_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "").expect("write config");
        let path = path.to_string_lossy().into_owned();

        let result = Flags::from_args(args(&["--config", &path, "--size", "huge"]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
