//! # Core Types
//!
//! Shared types for the AVS Replace host/panel system.
//!
//! ## Philosophy
//!
//! - **Opaque handles, not string paths**: files travel as [`FileRef`]
//!   handles; only the host ever dereferences them
//! - **Typed identifiers**: correlation tokens and session handles are
//!   UUID newtypes, never bare strings
//! - **Deterministic time**: all timing is expressed in explicit [`Tick`]
//!   values advanced by the driver, never wall-clock reads

pub mod file_ref;
pub mod ids;
pub mod pairs;
pub mod time;

pub use file_ref::FileRef;
pub use ids::{RequestToken, SessionId};
pub use pairs::ReplacementPair;
pub use time::{Tick, TickClock};
