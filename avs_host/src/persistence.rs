//! Persisted panel state
//!
//! Three independent slots, stored as JSON bytes. Loads never fail:
//! absent, corrupt, or wrong-version data falls back to the default so a
//! bad slot can never keep the panel from opening.

use avs_types::{FileRef, ReplacementPair};
use serde::{Deserialize, Serialize};

use crate::collaborators::SlotStore;

/// Slot holding the saved pair list
pub const SAVED_PAIRS_SLOT: &str = "avsReplace.savedPairs";

/// Slot holding the last picked file
pub const LAST_FILE_SLOT: &str = "avsReplace.lastFile";

/// Slot holding the strip-comments flag
pub const STRIP_COMMENTS_SLOT: &str = "avsReplace.stripComments";

/// Current pair-data format version
pub const PAIR_DATA_VERSION: u32 = 1;

/// Versioned envelope for the saved pair list
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedPairsData {
    version: u32,
    pairs: Vec<ReplacementPair>,
}

/// Stores the pair list verbatim under the current format version
pub fn store_pairs<S: SlotStore + ?Sized>(store: &mut S, pairs: &[ReplacementPair]) {
    let data = SavedPairsData {
        version: PAIR_DATA_VERSION,
        pairs: pairs.to_vec(),
    };
    let Ok(bytes) = serde_json::to_vec(&data) else {
        return;
    };
    store.set(SAVED_PAIRS_SLOT, bytes);
}

/// Loads the saved pair list, or an empty list on any defect
pub fn load_pairs<S: SlotStore + ?Sized>(store: &S) -> Vec<ReplacementPair> {
    let Some(bytes) = store.get(SAVED_PAIRS_SLOT) else {
        return Vec::new();
    };
    match serde_json::from_slice::<SavedPairsData>(&bytes) {
        Ok(data) if data.version == PAIR_DATA_VERSION => data.pairs,
        _ => Vec::new(),
    }
}

/// Stores the last picked file
pub fn store_last_file<S: SlotStore + ?Sized>(store: &mut S, file: &FileRef) {
    let Ok(bytes) = serde_json::to_vec(file) else {
        return;
    };
    store.set(LAST_FILE_SLOT, bytes);
}

/// Loads the last picked file, if one was persisted
pub fn load_last_file<S: SlotStore + ?Sized>(store: &S) -> Option<FileRef> {
    let bytes = store.get(LAST_FILE_SLOT)?;
    serde_json::from_slice(&bytes).ok()
}

/// Stores the strip-comments flag
pub fn store_strip<S: SlotStore + ?Sized>(store: &mut S, strip_comments: bool) {
    let Ok(bytes) = serde_json::to_vec(&strip_comments) else {
        return;
    };
    store.set(STRIP_COMMENTS_SLOT, bytes);
}

/// Loads the strip-comments flag, defaulting to off
pub fn load_strip<S: SlotStore + ?Sized>(store: &S) -> bool {
    let Some(bytes) = store.get(STRIP_COMMENTS_SLOT) else {
        return false;
    };
    serde_json::from_slice(&bytes).unwrap_or(false)
}
