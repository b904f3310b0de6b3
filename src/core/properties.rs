//! Flat properties file parsing.
//!
//! Parses the subset of the Java properties format that Gradle keystore
//! files actually use: one `key=value` pair per line, `:` accepted as an
//! alternate separator, `#` and `!` comments, surrounding whitespace
//! ignored. Duplicate keys follow last-assignment-wins, matching
//! `java.util.Properties`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::PropertiesError;

/// Parsed key-value pairs from a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse properties from a string.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::Syntax` with the 1-based line number when
    /// a non-blank, non-comment line has no `=` or `:` separator, or an
    /// empty key.
    pub fn parse(contents: &str) -> Result<Self, PropertiesError> {
        let mut entries = BTreeMap::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();

            // Skip blank lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some(pos) = line.find(['=', ':']) else {
                return Err(PropertiesError::Syntax {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            };

            let key = line[..pos].trim_end();
            let value = line[pos + 1..].trim_start();

            if key.is_empty() {
                return Err(PropertiesError::Syntax {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }

            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Read and parse a properties file from disk.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::Read` on I/O failure, or a syntax error
    /// from [`Properties::parse`].
    pub fn read(path: &Path) -> Result<Self, PropertiesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, treating an empty string the same as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
