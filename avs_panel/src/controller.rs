//! Panel controller
//!
//! Orchestrates the pair-list state machine, the request bridge, and the
//! outgoing command mailbox. One entry point per user affordance, each
//! mapping to exactly one transition or host request. Side effects are
//! observable only as outgoing commands, render frames, and transient
//! notices.

use avs_ipc::{Bridge, HostMessage, PanelCommand};
use avs_types::{FileRef, ReplacementPair, Tick};

use crate::state::{PairField, PairListState};

/// Continuations for the panel's round-trip requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPending {
    /// A file-picker request is in flight
    PickFile,
    /// A delete confirmation for the given row is in flight
    ConfirmDelete { index: usize },
}

/// The panel side of the protocol
#[derive(Debug)]
pub struct PanelController {
    list: PairListState,
    selected_file: Option<FileRef>,
    strip_comments: bool,
    bridge: Bridge<PanelPending>,
    outbox: Vec<PanelCommand>,
    notices: Vec<String>,
    revision: u64,
}

impl PanelController {
    /// Hydrates the panel once from persisted values
    ///
    /// Missing slots arrive as their defaults: an empty pair list (which
    /// the state machine immediately refills), no file, stripping off.
    pub fn hydrate(
        pairs: Vec<ReplacementPair>,
        last_file: Option<FileRef>,
        strip_comments: bool,
    ) -> Self {
        Self {
            list: PairListState::from_saved(pairs),
            selected_file: last_file,
            strip_comments,
            bridge: Bridge::new(),
            outbox: Vec::new(),
            notices: Vec::new(),
            revision: 1,
        }
    }

    /// Returns the current pair list
    pub fn pairs(&self) -> &[ReplacementPair] {
        self.list.pairs()
    }

    /// Returns the selected file, if any
    pub fn selected_file(&self) -> Option<&FileRef> {
        self.selected_file.as_ref()
    }

    /// Returns the strip-comments flag
    pub fn strip_comments(&self) -> bool {
        self.strip_comments
    }

    /// Returns the current render revision
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of round trips awaiting a reply
    pub fn requests_in_flight(&self) -> usize {
        self.bridge.in_flight()
    }

    /// Add affordance: append a blank row
    pub fn on_add(&mut self) {
        self.list.add();
        self.mutated();
        self.save_pairs();
    }

    /// Per-row edit affordance
    ///
    /// A stale index is a silent no-op and issues no persistence write.
    pub fn on_edit(&mut self, index: usize, field: PairField, value: impl Into<String>) {
        if self.list.edit(index, field, value).applied() {
            self.mutated();
            self.save_pairs();
        }
    }

    /// Per-row delete affordance: asks the host for confirmation first
    ///
    /// The row is only removed when a confirmed reply lands; a decline or
    /// timeout leaves the list untouched.
    pub fn on_delete(&mut self, index: usize, now: Tick) {
        let Some(pair) = self.list.get(index) else {
            return;
        };
        let preview = pair.find.clone();
        let id = self.bridge.open(PanelPending::ConfirmDelete { index }, now);
        self.outbox.push(PanelCommand::ConfirmDelete { id, index, preview });
    }

    /// Per-row drag affordance: move a row, post-removal target semantics
    pub fn on_reorder(&mut self, from: usize, to: usize) {
        if self.list.reorder(from, to).applied() {
            self.mutated();
            self.save_pairs();
            self.notices.push("Reordered".to_string());
        }
    }

    /// Pick-file affordance: round trip through the host's picker
    pub fn on_pick_file(&mut self, now: Tick) {
        let id = self.bridge.open(PanelPending::PickFile, now);
        self.outbox.push(PanelCommand::PickFile { id });
    }

    /// Strip-comments toggle affordance
    pub fn on_toggle_strip(&mut self, value: bool) {
        if self.strip_comments == value {
            return;
        }
        self.strip_comments = value;
        self.mutated();
        self.outbox.push(PanelCommand::SetStrip {
            strip_comments: value,
        });
    }

    /// Run affordance: fire-and-forget once a file is selected
    ///
    /// With no file selected this surfaces a transient notice and sends
    /// nothing; the run result itself is reported host-side.
    pub fn on_run(&mut self) {
        let Some(file) = self.selected_file.clone() else {
            self.notices.push("Choose a file first".to_string());
            return;
        };
        self.outbox.push(PanelCommand::Run {
            file,
            pairs: self.list.pairs().to_vec(),
            strip_comments: self.strip_comments,
        });
    }

    /// Handles one inbound host message
    ///
    /// Correlated replies resolve through the bridge; a late reply whose
    /// token is unknown (resolved or expired) is silently discarded.
    pub fn on_host_message(&mut self, message: HostMessage) {
        match message {
            HostMessage::FilePicked { reply, file } => {
                if self.bridge.resolve(reply) != Some(PanelPending::PickFile) {
                    return;
                }
                // Cancellation arrives as no file and changes nothing.
                if let Some(file) = file {
                    self.selected_file = Some(file);
                    self.mutated();
                }
            }
            HostMessage::DeleteDecision { reply, confirmed, .. } => {
                let Some(PanelPending::ConfirmDelete { index }) = self.bridge.resolve(reply) else {
                    return;
                };
                if !confirmed {
                    return;
                }
                // Bounds re-checked at apply time; the row may be gone.
                if self.list.delete_confirmed(index).applied() {
                    self.mutated();
                    self.save_pairs();
                    self.notices.push("Pair deleted".to_string());
                }
            }
            HostMessage::PairsSaved | HostMessage::StripSaved => {
                self.notices.push("Changes saved".to_string());
            }
        }
    }

    /// Advances the panel's view of time, expiring stale round trips
    ///
    /// A timed-out request is treated exactly like a cancellation: the
    /// pending entry is dropped and nothing else changes.
    pub fn on_tick(&mut self, now: Tick) {
        let _ = self.bridge.expire(now);
    }

    /// Drains the outgoing command mailbox
    pub fn take_outgoing(&mut self) -> Vec<PanelCommand> {
        std::mem::take(&mut self.outbox)
    }

    /// Drains the transient notices
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn mutated(&mut self) {
        self.revision += 1;
    }

    fn save_pairs(&mut self) {
        self.outbox.push(PanelCommand::SavePairs {
            pairs: self.list.pairs().to_vec(),
        });
    }
}
