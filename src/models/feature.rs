use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Trailing marker turning a feature into a prefix query
pub const WILDCARD: char = '*';

/// Normalized text token used as an index key
///
/// Ordering and equality are lexicographic over the underlying text, so a
/// sorted `Vec<Feature>` can be range-scanned by prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature(String);

impl Feature {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Feature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Feature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Feature {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Feature {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
