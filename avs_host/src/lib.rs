//! # Host
//!
//! The host side of AVS Replace: panel session lifecycle, command
//! dispatch, slot persistence, and the collaborator seams through which
//! the host touches storage, files, pickers, dialogs, and notices.
//!
//! ## Philosophy
//!
//! - **One session**: the host owns at most one panel session; a second
//!   activation reveals the existing one
//! - **Failure is a notice, not a crash**: every I/O failure is caught at
//!   the operation boundary, logged, and reported to the user
//! - **Seams, not globals**: the outside world is reached only through
//!   the collaborator traits, so tests run fully in memory
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A general storage layer (three fixed slots, nothing more)
//! - A file watcher or indexer
//! - A transport; mailboxes live in the IPC crate

pub mod collaborators;
pub mod controller;
pub mod persistence;
pub mod sim;

pub use collaborators::{ConfirmDialog, FileIo, FilePicker, IoFailure, NoticeSink, SlotStore};
pub use controller::{Activation, HostController, HostError, PanelSeed};
