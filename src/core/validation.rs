//! Build metadata validation.
//!
//! Validates application identifiers, SDK levels, and version fields
//! before they are handed to the packaging step.

use crate::error::{Result, ValidationError};

/// Lowest SDK level keyfob accepts as `min`.
pub const MIN_SUPPORTED_SDK: u32 = 21;

/// Validate a reverse-DNS application identifier.
///
/// Application ids must have at least two dot-separated segments, each
/// starting with an ASCII letter and containing only ASCII letters,
/// digits, and underscores.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` naming the offending shape.
pub fn validate_application_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "app.id",
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return Err(ValidationError::InvalidValue {
            field: "app.id",
            reason: format!("'{}' must have at least two dot-separated segments", id),
        }
        .into());
    }

    for segment in segments {
        let mut chars = segment.chars();
        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_alphabetic()
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            None => false,
        };

        if !valid {
            return Err(ValidationError::InvalidValue {
                field: "app.id",
                reason: format!(
                    "segment '{}' must start with a letter and contain only letters, digits, and underscores",
                    segment
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate SDK level ordering: `min <= target <= compile`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` naming the violated bound.
pub fn validate_sdk_levels(min: u32, target: u32, compile: u32) -> Result<()> {
    if min < MIN_SUPPORTED_SDK {
        return Err(ValidationError::InvalidValue {
            field: "sdk.min",
            reason: format!("{} is below the supported minimum {}", min, MIN_SUPPORTED_SDK),
        }
        .into());
    }

    if target < min {
        return Err(ValidationError::InvalidValue {
            field: "sdk.target",
            reason: format!("{} is below sdk.min {}", target, min),
        }
        .into());
    }

    if compile < target {
        return Err(ValidationError::InvalidValue {
            field: "sdk.compile",
            reason: format!("{} is below sdk.target {}", compile, target),
        }
        .into());
    }

    Ok(())
}

/// Validate a distribution version code.
///
/// Strict monotonicity against previously published builds is enforced by
/// the distribution platform; locally the code only has to be positive.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` if the code is zero.
pub fn validate_version_code(code: u32) -> Result<()> {
    if code == 0 {
        return Err(ValidationError::InvalidValue {
            field: "app.version_code",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validate a human-readable version name.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` if the name is empty.
pub fn validate_version_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "app.version_name",
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
