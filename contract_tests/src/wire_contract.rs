//! Wire schema contract tests
//!
//! These tests pin the stable wire contract for both directions of the
//! panel/host protocol: tag names, field names, and the closed-union
//! decode behavior. A change here is a protocol break.
