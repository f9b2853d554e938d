//! # Panel/Host IPC
//!
//! Message-passing primitives for the AVS Replace panel/host protocol.
//!
//! ## Philosophy
//!
//! - **Messages, not shared memory**: the panel and host communicate only
//!   through the two mailboxes, one per direction
//! - **Closed unions, not loose payloads**: every message shape in both
//!   directions is a tagged enum, validated at the decode boundary
//! - **Correlated, not callback-registered**: round trips go through one
//!   pending-request table keyed by token, with a uniform timeout path
//!
//! ## Architecture
//!
//! [`wire`] defines the tagged message schemas and the decode boundary
//! that rejects unrecognized tags with a [`ProtocolError`]. [`bridge`]
//! owns the pending-request table: a fresh token per request, at most one
//! resolution per token, and tick-based expiry that the caller treats
//! exactly like a cancellation. [`queue`] is the bounded FIFO mailbox.

pub mod bridge;
pub mod queue;
pub mod wire;

pub use bridge::{Bridge, PendingRequest, REPLY_TIMEOUT_TICKS};
pub use queue::{MessageQueue, QueueError};
pub use wire::{
    decode_command, decode_host_message, encode_command, encode_host_message, HostMessage,
    PanelCommand, ProtocolError,
};
