// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Load(LoadError),
}

/// Reasons an image resource could not be turned into pixels.
///
/// A load failure never aborts navigation: the viewer places the slot
/// without dimensions and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Local file could not be read (missing, permission denied, ...)
    Io(String),

    /// Remote resource could not be fetched or answered with an error status
    Network(String),

    /// Bytes were read but are not a decodable image
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Load(e) => write!(f, "Load Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Error::Load(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for LoadError {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => LoadError::Io(io.to_string()),
            other => LoadError::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn load_error_wraps_into_error() {
        let err: Error = LoadError::Decode("truncated".into()).into();
        assert_eq!(format!("{}", err), "Load Error: Decoding failed: truncated");
    }

    #[test]
    fn image_io_error_maps_to_load_io() {
        let err: LoadError =
            image_rs::ImageError::IoError(std::io::Error::other("gone")).into();
        assert!(matches!(err, LoadError::Io(msg) if msg.contains("gone")));
    }
}
