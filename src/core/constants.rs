//! Constants used throughout keyfob.
//!
//! Centralizes magic strings and the fixed project layout.

/// Manifest file name (keyfob.toml).
pub const MANIFEST_FILE: &str = "keyfob.toml";

/// Android directory name, relative to the project root.
pub const ANDROID_DIR: &str = "android";

/// Signing properties file name, inside the android directory.
pub const KEY_PROPERTIES_FILE: &str = "key.properties";

/// Properties entry naming the keystore file, relative to the android directory.
pub const PROP_STORE_FILE: &str = "storeFile";

/// Properties entry naming the key alias inside the keystore.
pub const PROP_KEY_ALIAS: &str = "keyAlias";

/// Properties entry holding the key entry password.
pub const PROP_KEY_PASSWORD: &str = "keyPassword";

/// Properties entry holding the keystore password.
pub const PROP_STORE_PASSWORD: &str = "storePassword";

/// Gitignore entries to protect signing material.
///
/// These entries ensure that credentials and keystores are not accidentally
/// committed.
pub const GITIGNORE_ENTRIES: &[&str] = &["android/key.properties", "*.keystore", "*.jks"];
