//! Project.
//!
//! The primary interface for keyfob operations: ties the manifest and the
//! signing configuration of one Android app project together.

use std::path::{Path, PathBuf};

use crate::core::constants;
use crate::core::manifest::Manifest;
use crate::core::signing::SigningConfig;
use crate::error::Result;

/// An Android app project with a keyfob manifest.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    manifest: Manifest,
}

impl Project {
    /// Open the project rooted at `dir`.
    ///
    /// Loads and validates the manifest; the signing configuration is
    /// loaded lazily by [`Project::signing`] so commands that only touch
    /// metadata never read credentials.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotInitialized` if no `keyfob.toml` exists,
    /// or any manifest parse/validation error.
    pub fn open(dir: &Path) -> Result<Self> {
        let manifest = Manifest::load(dir)?;

        Ok(Self {
            root: dir.to_path_buf(),
            manifest,
        })
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The loaded manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory holding `key.properties` and, typically, the keystore.
    pub fn android_dir(&self) -> PathBuf {
        self.root.join(constants::ANDROID_DIR)
    }

    /// Load the release signing configuration for this project.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::error::SigningError`] from the loader.
    pub fn signing(&self) -> Result<SigningConfig> {
        SigningConfig::load(&self.android_dir())
    }
}
