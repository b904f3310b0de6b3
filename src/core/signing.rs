//! Release signing configuration.
//!
//! Loads `key.properties` from the android directory, resolves the
//! keystore path, and hands the packaging step a complete credential set
//! or a fatal error. There is no partial success: a release must not be
//! signed with a guessed or defaulted credential.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::properties::Properties;
use crate::core::secret::SecretString;
use crate::error::{Result, SigningError};

/// Credentials for signing a release build.
///
/// All four fields are mandatory. Passwords live in zeroizing memory and
/// are redacted from `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// Absolute path to the keystore file.
    pub store_file: PathBuf,
    /// Key alias inside the keystore.
    pub key_alias: String,
    /// Password for the key entry.
    pub key_password: SecretString,
    /// Password for the keystore itself.
    pub store_password: SecretString,
}

impl SigningConfig {
    /// Load signing credentials from `key.properties` in `android_dir`.
    ///
    /// The `storeFile` entry is resolved against `android_dir`, matching
    /// the layout where the keystore sits next to the properties file and
    /// one directory above the app module's build script.
    ///
    /// # Errors
    ///
    /// - `SigningError::Missing` if the file does not exist; the message
    ///   carries the absolute path that was tried.
    /// - `SigningError::Unreadable` if the file cannot be read or parsed,
    ///   wrapping the underlying cause.
    /// - `SigningError::MissingField` if any of `storeFile`, `keyAlias`,
    ///   `keyPassword`, or `storePassword` is absent or empty.
    pub fn load(android_dir: &Path) -> Result<Self> {
        let path = absolutize(&android_dir.join(constants::KEY_PROPERTIES_FILE));
        debug!(path = %path.display(), "loading signing properties");

        if !path.exists() {
            return Err(SigningError::Missing { path }.into());
        }

        let props = Properties::read(&path).map_err(|source| SigningError::Unreadable {
            path: path.clone(),
            source,
        })?;

        let store_file = required(&props, constants::PROP_STORE_FILE)?;
        let key_alias = required(&props, constants::PROP_KEY_ALIAS)?;
        let key_password = required(&props, constants::PROP_KEY_PASSWORD)?;
        let store_password = required(&props, constants::PROP_STORE_PASSWORD)?;

        let store_file = absolutize(&android_dir.join(store_file));

        debug!(
            store_file = %store_file.display(),
            alias = %key_alias,
            "signing properties loaded"
        );

        Ok(Self {
            store_file,
            key_alias: key_alias.to_string(),
            key_password: SecretString::new(key_password),
            store_password: SecretString::new(store_password),
        })
    }

    /// Error unless the keystore named by `storeFile` exists on disk.
    ///
    /// The properties file can be complete while the keystore itself was
    /// never copied onto the machine; packaging would only notice at the
    /// very end of the build.
    ///
    /// # Errors
    ///
    /// Returns `SigningError::KeystoreNotFound` with the absolute path.
    pub fn require_keystore(&self) -> Result<()> {
        if self.store_file.exists() {
            Ok(())
        } else {
            Err(SigningError::KeystoreNotFound {
                path: self.store_file.clone(),
            }
            .into())
        }
    }
}

/// Fetch a required property, treating an empty value as absent.
fn required<'a>(props: &'a Properties, field: &'static str) -> Result<&'a str> {
    props
        .get_non_empty(field)
        .ok_or_else(|| SigningError::MissingField { field }.into())
}

/// Make a path absolute against the current directory, without requiring
/// it to exist.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
