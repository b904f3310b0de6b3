//! Project manifest management.
//!
//! Handles reading, writing, and validating `keyfob.toml` manifests.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::validation;
use crate::error::{ManifestError, Result};

/// Project manifest stored in `keyfob.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Application identity and versioning
    pub app: App,
    /// SDK levels the build compiles against and targets
    pub sdk: Sdk,
    /// Release build-type flags passed through to the packaging step
    #[serde(default)]
    pub release: Release,
}

/// Application identity section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    /// Reverse-DNS application identifier
    pub id: String,
    /// Distribution version code; the store rejects codes it has already
    /// seen, so this must grow with every published build
    pub version_code: u32,
    /// Human-readable version string
    pub version_name: String,
}

/// SDK level section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sdk {
    /// Oldest platform the app installs on
    pub min: u32,
    /// Platform the app declares it was tested against
    pub target: u32,
    /// Platform the build compiles against
    pub compile: u32,
    /// NDK toolchain pin, if the project builds native code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk: Option<String>,
}

/// Release build-type flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    /// Enable code shrinking and obfuscation
    #[serde(default = "default_true")]
    pub minify: bool,
    /// Strip unused resources from the artifact
    #[serde(default = "default_true")]
    pub shrink_resources: bool,
    /// Proguard rules files, relative to the app module
    #[serde(default = "default_proguard_files")]
    pub proguard_files: Vec<String>,
}

impl Default for Release {
    fn default() -> Self {
        Self {
            minify: true,
            shrink_resources: true,
            proguard_files: default_proguard_files(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_proguard_files() -> Vec<String> {
    vec!["proguard-rules.pro".to_string()]
}

impl Manifest {
    /// Path to the manifest inside `project_dir`
    pub fn manifest_path(project_dir: &Path) -> PathBuf {
        project_dir.join(constants::MANIFEST_FILE)
    }

    /// Check if a manifest exists in `project_dir`
    pub fn exists(project_dir: &Path) -> bool {
        Self::manifest_path(project_dir).exists()
    }

    /// Load and validate the manifest from `keyfob.toml`
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::NotInitialized` if the file doesn't exist,
    /// `ManifestError::Parse` if the TOML is malformed, or a
    /// `ValidationError` if the metadata violates its invariants.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = Self::manifest_path(project_dir);
        debug!(path = %path.display(), "loading manifest");

        if !path.exists() {
            return Err(ManifestError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ManifestError::ReadFile)?;
        let manifest: Self = toml::from_str(&contents).map_err(ManifestError::Parse)?;

        debug!(
            app = %manifest.app.id,
            version_code = manifest.app.version_code,
            "manifest loaded"
        );

        manifest.validate()?;

        Ok(manifest)
    }

    /// Save the manifest to `keyfob.toml`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, project_dir: &Path) -> Result<()> {
        debug!("saving manifest");

        let contents = toml::to_string_pretty(self).map_err(ManifestError::Serialize)?;
        std::fs::write(Self::manifest_path(project_dir), contents)?;

        Ok(())
    }

    /// Validate the build metadata invariants
    ///
    /// Checks:
    /// - Application id is reverse-DNS shaped
    /// - `sdk.min <= sdk.target <= sdk.compile`, with `sdk.min` at least 21
    /// - Version code is positive
    /// - Version name is non-empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidValue` naming field and reason.
    pub fn validate(&self) -> Result<()> {
        debug!("validating manifest");

        validation::validate_application_id(&self.app.id)?;
        validation::validate_sdk_levels(self.sdk.min, self.sdk.target, self.sdk.compile)?;
        validation::validate_version_code(self.app.version_code)?;
        validation::validate_version_name(&self.app.version_name)?;

        Ok(())
    }

    /// Manifest scaffold written by `keyfob init`
    pub fn scaffold(application_id: &str) -> Self {
        Self {
            app: App {
                id: application_id.to_string(),
                version_code: 1,
                version_name: "1.0.0".to_string(),
            },
            sdk: Sdk {
                min: validation::MIN_SUPPORTED_SDK,
                target: 35,
                compile: 36,
                ndk: None,
            },
            release: Release::default(),
        }
    }
}

/// Ensure `.gitignore` covers signing material
///
/// Adds `android/key.properties`, `*.keystore`, and `*.jks` if not already
/// present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(project_dir: &Path) -> Result<()> {
    let gitignore = project_dir.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
