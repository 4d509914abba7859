//! Error types for FormKit GUI
//!
//! The table and input cores are total and never fail. Errors only come from
//! the gallery's configuration handling.

use std::path::PathBuf;

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error while reading or writing a config file
    #[snafu(display("IO error on {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML deserialization error
    #[snafu(display("TOML parse error in {}: {source}", path.display()))]
    TomlDe {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
