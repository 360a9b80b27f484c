use serde::Deserialize;
use std::fmt;

/// A wrapper for sensitive data that masks its value in Debug and Display output.
///
/// `Masked` deliberately has no `Serialize` impl: a struct holding one cannot
/// put the secret on the wire unless the field is skipped.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl Masked<String> {
    /// Exact comparison against a presented credential.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
