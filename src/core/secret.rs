//! Secret string type.
//!
//! Wraps credential values so they are zeroized on drop and cannot leak
//! through `Debug` or log output.

use zeroize::Zeroizing;

/// A credential value held in zeroizing memory.
///
/// The plaintext is only reachable through [`SecretString::expose`], which
/// keeps accidental formatting of passwords out of diagnostics.
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
    /// Wrap a plaintext value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plaintext.
    ///
    /// Callers must not write the returned value into logs or persistent
    /// output unless the user explicitly asked for it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True if the wrapped value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString(<redacted>)")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for SecretString {}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
