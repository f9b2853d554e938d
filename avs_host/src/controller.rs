//! Host controller
//!
//! Owns the single panel session and dispatches panel commands against
//! the collaborator seams. Every dispatch is logged; every I/O failure is
//! caught at the operation boundary and reported through the notice sink,
//! never propagated as a fatal error.

use avs_ipc::{HostMessage, PanelCommand};
use avs_logger::{LogBuffer, LogEntry, LogLevel};
use avs_types::{FileRef, ReplacementPair, SessionId};
use thiserror::Error;

use crate::collaborators::{ConfirmDialog, FileIo, FilePicker, IoFailure, NoticeSink, SlotStore};
use crate::persistence;

/// Error from host dispatch
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// A command arrived while no panel session is open
    #[error("no active panel session")]
    NoActiveSession,
}

/// Persisted values handed to a freshly created panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSeed {
    pub pairs: Vec<ReplacementPair>,
    pub last_file: Option<FileRef>,
    pub strip_comments: bool,
}

/// Outcome of an activation request
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// No session was open; a new one was created and seeded
    Created { session: SessionId, seed: PanelSeed },
    /// A session was already open; it was revealed instead
    Revealed { session: SessionId },
}

/// The host side of the protocol
#[derive(Debug)]
pub struct HostController<S, F, P, D, N> {
    store: S,
    fs: F,
    picker: P,
    dialog: D,
    notices: N,
    session: Option<SessionId>,
    log: LogBuffer,
}

impl<S, F, P, D, N> HostController<S, F, P, D, N>
where
    S: SlotStore,
    F: FileIo,
    P: FilePicker,
    D: ConfirmDialog,
    N: NoticeSink,
{
    /// Creates a host with no open session
    pub fn new(store: S, fs: F, picker: P, dialog: D, notices: N) -> Self {
        Self {
            store,
            fs,
            picker,
            dialog,
            notices,
            session: None,
            log: LogBuffer::new(),
        }
    }

    /// Returns the open session, if any
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Returns the host's log buffer
    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    /// Returns the slot store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the filesystem collaborator
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Returns the filesystem collaborator mutably
    pub fn fs_mut(&mut self) -> &mut F {
        &mut self.fs
    }

    /// Returns the confirmation dialog collaborator
    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    /// Returns the notice sink
    pub fn notices(&self) -> &N {
        &self.notices
    }

    /// Activates the panel
    ///
    /// With no session open this creates one and returns the persisted
    /// seed values the panel hydrates from. With a session already open
    /// it reveals the existing one; no second session is ever created.
    pub fn activate(&mut self) -> Activation {
        if let Some(session) = self.session {
            self.log.record(
                LogEntry::new(LogLevel::Debug, "panel revealed").with_session(session),
            );
            return Activation::Revealed { session };
        }

        let session = SessionId::new();
        self.session = Some(session);
        let seed = PanelSeed {
            pairs: persistence::load_pairs(&self.store),
            last_file: persistence::load_last_file(&self.store),
            strip_comments: persistence::load_strip(&self.store),
        };
        self.log.record(
            LogEntry::new(LogLevel::Info, "panel session created").with_session(session),
        );
        Activation::Created { session, seed }
    }

    /// Disposes the open session, if any
    ///
    /// Live panel state is discarded; only what was already persisted
    /// survives into the next activation.
    pub fn dispose(&mut self) {
        if let Some(session) = self.session.take() {
            self.log.record(
                LogEntry::new(LogLevel::Info, "panel session disposed").with_session(session),
            );
        }
    }

    /// Dispatches one panel command, returning the host's replies in order
    pub fn dispatch(&mut self, command: PanelCommand) -> Result<Vec<HostMessage>, HostError> {
        let session = self.session.ok_or(HostError::NoActiveSession)?;
        self.log.record(
            LogEntry::new(LogLevel::Debug, "dispatch")
                .with_session(session)
                .with_field("command", command.tag()),
        );

        match command {
            PanelCommand::Run {
                file,
                pairs,
                strip_comments,
            } => {
                match self.run_replace(&file, &pairs, strip_comments) {
                    Ok(dest) => {
                        self.notices.info(&format!("AVS Replace wrote {dest}"));
                    }
                    Err(failure) => {
                        self.log.record(
                            LogEntry::new(LogLevel::Error, "replace run failed")
                                .with_session(session)
                                .with_field("error", failure.to_string()),
                        );
                        self.notices.error(&format!("AVS Replace failed: {failure}"));
                    }
                }
                Ok(vec![])
            }
            PanelCommand::PickFile { id } => {
                let file = self.picker.pick_single_file();
                if let Some(file) = &file {
                    persistence::store_last_file(&mut self.store, file);
                }
                Ok(vec![HostMessage::FilePicked { reply: id, file }])
            }
            PanelCommand::SavePairs { pairs } => {
                persistence::store_pairs(&mut self.store, &pairs);
                Ok(vec![HostMessage::PairsSaved])
            }
            PanelCommand::SetStrip { strip_comments } => {
                persistence::store_strip(&mut self.store, strip_comments);
                Ok(vec![HostMessage::StripSaved])
            }
            PanelCommand::ConfirmDelete { id, index, preview } => {
                let prompt = if preview.is_empty() {
                    "Delete this replacement?".to_string()
                } else {
                    format!("Delete the replacement for \"{preview}\"?")
                };
                let confirmed = self.dialog.confirm(&prompt);
                Ok(vec![HostMessage::DeleteDecision {
                    reply: id,
                    confirmed,
                    index,
                }])
            }
        }
    }

    /// Reads the source, applies the transform, writes the sibling output
    fn run_replace(
        &mut self,
        file: &FileRef,
        pairs: &[ReplacementPair],
        strip_comments: bool,
    ) -> Result<FileRef, IoFailure> {
        let text = self.fs.read_text(file)?;
        let output = avs_transform::apply(&text, pairs, strip_comments);
        let dest = file.sibling(&format!("AVS-{}", file.file_name()));
        self.fs.write_text(&dest, &output)?;
        Ok(dest)
    }
}
