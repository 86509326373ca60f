use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key a presentation group is keyed by in the output tree.
///
/// Top-level identifiers are generated by the host; the engine only derives
/// identifiers for the sub-nodes it synthesizes itself (see [`TabIdentifier::child`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabIdentifier(String);

impl TabIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stable identifier for the n-th generated sub-node of this group.
    pub fn child(&self, ordinal: usize) -> Self {
        Self(format!("{}#{}", self.0, ordinal))
    }
}

impl fmt::Display for TabIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TabIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}
