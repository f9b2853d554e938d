//! Wire message schemas and the decode boundary
//!
//! Both directions are closed tagged unions. Decoding validates the tag
//! before deserializing the body, so an unrecognized command fails loudly
//! with a [`ProtocolError`] instead of being silently dropped.

use avs_types::{FileRef, ReplacementPair, RequestToken};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Known panel→host command tags
const PANEL_COMMAND_TAGS: &[&str] = &["run", "pickFile", "savePairs", "setStrip", "confirmDelete"];

/// Known host→panel message tags
const HOST_MESSAGE_TAGS: &[&str] = &["filePicked", "deleteDecision", "pairsSaved", "stripSaved"];

/// A command sent from the panel to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelCommand {
    /// Run the transform over the selected file (fire-and-forget)
    #[serde(rename_all = "camelCase")]
    Run {
        file: FileRef,
        pairs: Vec<ReplacementPair>,
        strip_comments: bool,
    },
    /// Open the file picker; the reply is correlated by `id`
    PickFile { id: RequestToken },
    /// Persist the full pair list verbatim
    SavePairs { pairs: Vec<ReplacementPair> },
    /// Persist the strip-comments flag
    #[serde(rename_all = "camelCase")]
    SetStrip { strip_comments: bool },
    /// Ask for delete confirmation; the reply is correlated by `id`
    ConfirmDelete {
        id: RequestToken,
        index: usize,
        preview: String,
    },
}

impl PanelCommand {
    /// Returns the wire tag for this command
    pub fn tag(&self) -> &'static str {
        match self {
            PanelCommand::Run { .. } => "run",
            PanelCommand::PickFile { .. } => "pickFile",
            PanelCommand::SavePairs { .. } => "savePairs",
            PanelCommand::SetStrip { .. } => "setStrip",
            PanelCommand::ConfirmDelete { .. } => "confirmDelete",
        }
    }

    /// Returns the correlation token, if this command expects a reply
    pub fn token(&self) -> Option<RequestToken> {
        match self {
            PanelCommand::PickFile { id } | PanelCommand::ConfirmDelete { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// A message sent from the host to the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HostMessage {
    /// Correlated reply to `pickFile`; `file` is `None` on cancellation
    FilePicked {
        reply: RequestToken,
        file: Option<FileRef>,
    },
    /// Correlated reply to `confirmDelete`
    DeleteDecision {
        reply: RequestToken,
        confirmed: bool,
        index: usize,
    },
    /// Fire-and-forget ack for `savePairs`; carries no token
    PairsSaved,
    /// Fire-and-forget ack for `setStrip`; carries no token
    StripSaved,
}

impl HostMessage {
    /// Returns the correlation token for correlated replies
    pub fn correlation(&self) -> Option<RequestToken> {
        match self {
            HostMessage::FilePicked { reply, .. } | HostMessage::DeleteDecision { reply, .. } => {
                Some(*reply)
            }
            HostMessage::PairsSaved | HostMessage::StripSaved => None,
        }
    }
}

/// Error at the message decode boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The discriminator field is missing or not a string
    #[error("message is missing its \"{0}\" tag")]
    MissingTag(&'static str),

    /// The discriminator names no known message shape
    #[error("unrecognized \"{field}\" tag: {tag}")]
    UnrecognizedTag { field: &'static str, tag: String },

    /// The tag was known but the body did not match its shape
    #[error("malformed message body: {0}")]
    Malformed(String),
}

/// Encodes a panel command as JSON bytes
pub fn encode_command(command: &PanelCommand) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(command).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

/// Decodes a panel command, validating the tag first
pub fn decode_command(bytes: &[u8]) -> Result<PanelCommand, ProtocolError> {
    let value = decode_tagged(bytes, "command", PANEL_COMMAND_TAGS)?;
    serde_json::from_value(value).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

/// Encodes a host message as JSON bytes
pub fn encode_host_message(message: &HostMessage) -> Result<Vec<u8>, ProtocolError> {
    serde_json::to_vec(message).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

/// Decodes a host message, validating the tag first
pub fn decode_host_message(bytes: &[u8]) -> Result<HostMessage, ProtocolError> {
    let value = decode_tagged(bytes, "kind", HOST_MESSAGE_TAGS)?;
    serde_json::from_value(value).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

fn decode_tagged(
    bytes: &[u8],
    field: &'static str,
    known: &[&str],
) -> Result<serde_json::Value, ProtocolError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ProtocolError::Malformed(e.to_string()))?;
    let tag = value
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or(ProtocolError::MissingTag(field))?;
    if !known.contains(&tag) {
        return Err(ProtocolError::UnrecognizedTag {
            field,
            tag: tag.to_string(),
        });
    }
    Ok(value)
}
