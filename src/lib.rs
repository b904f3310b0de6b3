//! Keyfob - release-signing configuration manager for Android app projects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Scaffold keyfob.toml + android/key.properties
//! │   ├── check         # Validate signing config and build metadata
//! │   ├── show          # Print the resolved configuration
//! │   ├── doctor        # Diagnose the signing environment
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── manifest      # keyfob.toml management
//!     ├── properties    # Flat key=value properties parsing
//!     ├── signing       # key.properties loading and validation
//!     ├── secret        # Zeroizing secret wrapper
//!     ├── fingerprint   # Keystore digests
//!     └── project       # Project handle tying it together
//! ```
//!
//! # Features
//!
//! - Fail-fast validation of `android/key.properties`
//! - Keystore path resolution and SHA-256 fingerprinting
//! - Build metadata checks (application id, SDK levels, version code)
//! - Passwords zeroized on drop, redacted everywhere by default

pub mod cli;
pub mod core;
pub mod error;
