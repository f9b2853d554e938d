//! Unique identifiers for protocol entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Correlation token for one in-flight panel request
///
/// A fresh token is generated per request and never reused. The bridge
/// matches host replies against it; a token that has already resolved
/// (or timed out) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(Uuid);

impl RequestToken {
    /// Creates a new random request token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a request token from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token:{}", self.0)
    }
}

/// Identifier for one live panel session
///
/// The host owns at most one session at a time. Commands carry no session
/// field on the wire; the host checks the handle it was given against the
/// session it currently owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a session ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session:{}", self.0)
    }
}
