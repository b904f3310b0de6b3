//! Error types for keyfob operations.
//!
//! Grouped by the layer that produces them; everything converges into the
//! top-level [`Error`] so callers only carry one type.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type wrapping all failure domains.
#[derive(Error, Debug)]
pub enum Error {
    /// Signing properties errors
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// Manifest errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive prompt errors
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors loading the release signing configuration from `key.properties`.
///
/// All of these abort the packaging step; there is no partial or degraded
/// signing configuration.
#[derive(Error, Debug)]
pub enum SigningError {
    /// The properties file does not exist at the resolved path.
    #[error("signing properties not found: {}", .path.display())]
    Missing {
        /// Absolute path that was tried
        path: PathBuf,
    },

    /// The properties file exists but cannot be read or parsed.
    #[error("failed to load {}: {source}", .path.display())]
    Unreadable {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying read or parse failure
        #[source]
        source: PropertiesError,
    },

    /// A required entry is absent or empty.
    #[error("missing or empty '{field}' in key.properties")]
    MissingField {
        /// Name of the offending entry
        field: &'static str,
    },

    /// The resolved keystore file does not exist.
    #[error("keystore not found: {}", .path.display())]
    KeystoreNotFound {
        /// Absolute keystore path from the `storeFile` entry
        path: PathBuf,
    },
}

/// Errors reading or parsing a flat properties file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// The file could not be read
    #[error("{0}")]
    Read(#[from] std::io::Error),

    /// A non-blank line had no `key=value` shape
    #[error("line {line}: expected 'key=value', got '{text}'")]
    Syntax {
        /// 1-based line number
        line: usize,
        /// The offending line, as written
        text: String,
    },
}

/// Errors loading or writing the `keyfob.toml` manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// No manifest in the project directory
    #[error("not initialized: run `keyfob init` first")]
    NotInitialized,

    /// A manifest already exists
    #[error("already initialized: keyfob.toml exists")]
    AlreadyInitialized,

    /// The manifest could not be read
    #[error("failed to read keyfob.toml: {0}")]
    ReadFile(#[source] std::io::Error),

    /// The manifest is not valid TOML
    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The manifest could not be serialized
    #[error("toml serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors from build metadata validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A field holds a value outside its allowed shape or range
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        /// Manifest field name
        field: &'static str,
        /// Human-readable explanation
        reason: String,
    },
}

/// Result alias using the top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
