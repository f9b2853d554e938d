//! # Panel
//!
//! The panel side of AVS Replace: the ordered pair-list state machine,
//! the controller that wires user affordances to transitions and host
//! requests, and the structured frame the panel publishes for rendering.
//!
//! ## Philosophy
//!
//! - **State machine, not DOM**: all editing state is explicit; rendering
//!   is a structured [`PanelFrame`], presentation is someone else's job
//! - **Bounds-checked at apply time**: a stale index from a delayed
//!   callback is a silent no-op, never a corruption
//! - **Never visibly empty**: the empty-list guard runs as part of every
//!   mutating transition, not as a rendering side effect
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A widget toolkit
//! - An undo/redo system
//! - A multi-user editor

pub mod controller;
pub mod render;
pub mod state;

pub use controller::{PanelController, PanelPending};
pub use render::{PairRow, PanelFrame};
pub use state::{PairField, PairListState, Transition};
