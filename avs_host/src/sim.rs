//! In-memory simulation collaborators
//!
//! Deterministic stand-ins for the host's collaborator seams, used by the
//! crate's own tests and by the cross-crate contract tests. Scripted
//! collaborators replay queued answers; recording collaborators keep what
//! they were told for later assertion.

use std::collections::{BTreeMap, VecDeque};

use avs_types::FileRef;

use crate::collaborators::{ConfirmDialog, FileIo, FilePicker, IoFailure, NoticeSink, SlotStore};

/// In-memory slot store that counts writes
#[derive(Debug, Default)]
pub struct MemStore {
    slots: BTreeMap<String, Vec<u8>>,
    write_count: usize,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of `set` calls observed
    pub fn writes(&self) -> usize {
        self.write_count
    }
}

impl SlotStore for MemStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.write_count += 1;
        self.slots.insert(key.to_string(), value);
    }
}

/// In-memory filesystem with switchable failure modes
#[derive(Debug, Default)]
pub struct MemFs {
    files: BTreeMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file with the given contents
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Makes every subsequent read fail
    pub fn fail_reads(&mut self) {
        self.fail_reads = true;
    }

    /// Makes every subsequent write fail
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    /// Returns the contents of `file`, if present
    pub fn contents(&self, file: &FileRef) -> Option<&str> {
        self.files.get(file.as_str()).map(String::as_str)
    }
}

impl FileIo for MemFs {
    fn read_text(&self, file: &FileRef) -> Result<String, IoFailure> {
        if self.fail_reads {
            return Err(IoFailure::Read {
                path: file.as_str().to_string(),
                reason: "simulated read failure".to_string(),
            });
        }
        self.files
            .get(file.as_str())
            .cloned()
            .ok_or_else(|| IoFailure::Read {
                path: file.as_str().to_string(),
                reason: "no such file".to_string(),
            })
    }

    fn write_text(&mut self, file: &FileRef, contents: &str) -> Result<(), IoFailure> {
        if self.fail_writes {
            return Err(IoFailure::Write {
                path: file.as_str().to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        self.files
            .insert(file.as_str().to_string(), contents.to_string());
        Ok(())
    }
}

/// Picker that replays a queue of scripted answers
///
/// An exhausted queue answers `None`, the same as a user cancelling.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    answers: VecDeque<Option<FileRef>>,
}

impl ScriptedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one answer
    pub fn will_pick(mut self, answer: Option<FileRef>) -> Self {
        self.answers.push_back(answer);
        self
    }
}

impl FilePicker for ScriptedPicker {
    fn pick_single_file(&mut self) -> Option<FileRef> {
        self.answers.pop_front().flatten()
    }
}

/// Dialog that replays scripted decisions and records its prompts
///
/// An exhausted queue declines.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    decisions: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one decision
    pub fn will_answer(mut self, confirmed: bool) -> Self {
        self.decisions.push_back(confirmed);
        self
    }

    /// Returns the prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ConfirmDialog for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.decisions.pop_front().unwrap_or(false)
    }
}

/// Notice sink that records everything it is told
#[derive(Debug, Default)]
pub struct RecordingNotices {
    infos: Vec<String>,
    errors: Vec<String>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl NoticeSink for RecordingNotices {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_store_counts_writes() {
        let mut store = MemStore::new();
        assert_eq!(store.writes(), 0);
        store.set("k", vec![1]);
        store.set("k", vec![2]);
        assert_eq!(store.writes(), 2);
        assert_eq!(store.get("k"), Some(vec![2]));
    }

    #[test]
    fn test_mem_fs_read_write() {
        let mut fs = MemFs::new().with_file("/a.txt", "hello");
        let file = FileRef::new("/a.txt");
        assert_eq!(fs.read_text(&file).unwrap(), "hello");
        fs.write_text(&FileRef::new("/b.txt"), "world").unwrap();
        assert_eq!(fs.contents(&FileRef::new("/b.txt")), Some("world"));
    }

    #[test]
    fn test_mem_fs_missing_file() {
        let fs = MemFs::new();
        let err = fs.read_text(&FileRef::new("/nope")).unwrap_err();
        assert!(matches!(err, IoFailure::Read { .. }));
    }

    #[test]
    fn test_mem_fs_failure_modes() {
        let mut fs = MemFs::new().with_file("/a.txt", "x");
        fs.fail_reads();
        assert!(fs.read_text(&FileRef::new("/a.txt")).is_err());

        let mut fs = MemFs::new();
        fs.fail_writes();
        assert!(fs.write_text(&FileRef::new("/a.txt"), "x").is_err());
    }

    #[test]
    fn test_scripted_picker_exhaustion_cancels() {
        let mut picker = ScriptedPicker::new().will_pick(Some(FileRef::new("/a")));
        assert_eq!(picker.pick_single_file(), Some(FileRef::new("/a")));
        assert_eq!(picker.pick_single_file(), None);
    }

    #[test]
    fn test_scripted_confirm_records_prompts() {
        let mut dialog = ScriptedConfirm::new().will_answer(true);
        assert!(dialog.confirm("Delete?"));
        assert!(!dialog.confirm("Again?"));
        assert_eq!(dialog.prompts(), &["Delete?".to_string(), "Again?".to_string()]);
    }
}
