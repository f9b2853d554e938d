//! Host collaborator traits
//!
//! The host controller touches the outside world only through these
//! seams. Production wires in platform implementations; tests wire in the
//! in-memory collaborators from [`crate::sim`].

use avs_types::FileRef;
use thiserror::Error;

/// Keyed byte-slot storage for persisted panel state
///
/// Slots are independent; writing one never touches another. Reads of
/// absent slots return `None` and callers fall back to defaults.
pub trait SlotStore {
    /// Returns the bytes stored under `key`, if any
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: Vec<u8>);
}

/// File I/O failure, caught at the operation boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IoFailure {
    /// The source file could not be read
    #[error("cannot read {path}: {reason}")]
    Read { path: String, reason: String },

    /// The output file could not be written
    #[error("cannot write {path}: {reason}")]
    Write { path: String, reason: String },
}

/// Whole-file text I/O
pub trait FileIo {
    /// Reads the full contents of `file` as text
    fn read_text(&self, file: &FileRef) -> Result<String, IoFailure>;

    /// Writes `contents` to `file`, replacing it
    fn write_text(&mut self, file: &FileRef, contents: &str) -> Result<(), IoFailure>;
}

/// Single-file picker
///
/// Cancellation is `None`, not an error.
pub trait FilePicker {
    fn pick_single_file(&mut self) -> Option<FileRef>;
}

/// Modal yes/no confirmation
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Fire-and-forget user notices
pub trait NoticeSink {
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}
