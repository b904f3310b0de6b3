//! Test support utilities for keyfob integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp project directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Project with manifest, key.properties, and keystore all in place.
    pub fn ready() -> Self {
        let t = Self::new();
        t.write_manifest(fixtures::MANIFEST);
        t.write_key_properties(fixtures::COMPLETE_PROPERTIES);
        t.write_keystore();
        t
    }

    /// The android directory inside the test project.
    pub fn android_dir(&self) -> PathBuf {
        self.dir.path().join("android")
    }

    /// Write a keyfob.toml with the given contents.
    pub fn write_manifest(&self, contents: &str) {
        std::fs::write(self.dir.path().join("keyfob.toml"), contents)
            .expect("failed to write manifest");
    }

    /// Write android/key.properties with the given contents.
    pub fn write_key_properties(&self, contents: &str) {
        let android = self.android_dir();
        std::fs::create_dir_all(&android).expect("failed to create android dir");
        std::fs::write(android.join("key.properties"), contents)
            .expect("failed to write key.properties");
    }

    /// Write a stub keystore file at android/release.keystore.
    pub fn write_keystore(&self) {
        let android = self.android_dir();
        std::fs::create_dir_all(&android).expect("failed to create android dir");
        std::fs::write(android.join("release.keystore"), fixtures::KEYSTORE_BYTES)
            .expect("failed to write keystore");
    }
}
