//! Find/replace pair data model

use serde::{Deserialize, Serialize};

/// One literal find/replace rule
///
/// `find` is matched as literal text, never as a pattern. `replace`
/// defaults to the empty string when absent on the wire. Identity is
/// positional: a pair is addressed by its index in the ordered list,
/// and reordering changes identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementPair {
    /// Literal text to find
    pub find: String,
    /// Replacement text (empty string removes the match)
    #[serde(default)]
    pub replace: String,
}

impl ReplacementPair {
    /// Creates a new pair
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Creates the blank pair used to refill an empty list
    pub fn blank() -> Self {
        Self::default()
    }

    /// Returns true when both fields are empty
    pub fn is_blank(&self) -> bool {
        self.find.is_empty() && self.replace.is_empty()
    }

    /// Returns true when this pair participates in substitution
    pub fn has_find(&self) -> bool {
        !self.find.is_empty()
    }
}
