//! # Protocol Contract Tests
//!
//! Cross-crate tests for the panel/host protocol, exercised over the
//! encoded wire representation so that contract drift fails loudly.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: wire shapes are pinned as golden strings
//! - **Whole loop, not layers**: flow tests pump real encoded messages
//!   through the mailboxes in both directions
//! - **Deterministic time**: timeout paths are driven by an explicit
//!   clock, never by sleeping
//!
//! ## Structure
//!
//! [`wire_contract`] pins the tagged message schemas. [`panel_host`]
//! drives complete user flows through [`harness::ProtocolLoop`].

pub mod panel_host;
pub mod wire_contract;

/// A panel and a host wired together through encoded mailboxes
pub mod harness {
    use avs_host::sim::{MemFs, MemStore, RecordingNotices, ScriptedConfirm, ScriptedPicker};
    use avs_host::{Activation, HostController, PanelSeed};
    use avs_ipc::MessageQueue;
    use avs_ipc::{decode_command, decode_host_message, encode_command, encode_host_message};
    use avs_panel::PanelController;
    use avs_types::TickClock;

    pub type SimHost =
        HostController<MemStore, MemFs, ScriptedPicker, ScriptedConfirm, RecordingNotices>;

    /// Mailbox capacity for the pumped loop
    const MAILBOX_CAPACITY: usize = 32;

    pub struct ProtocolLoop {
        pub panel: PanelController,
        pub host: SimHost,
        pub clock: TickClock,
    }

    impl ProtocolLoop {
        /// Activates the host and hydrates a panel from the seed it hands out
        pub fn boot(fs: MemFs, picker: ScriptedPicker, dialog: ScriptedConfirm) -> Self {
            Self::boot_with_store(MemStore::new(), fs, picker, dialog)
        }

        /// Boots against a pre-populated slot store
        pub fn boot_with_store(
            store: MemStore,
            fs: MemFs,
            picker: ScriptedPicker,
            dialog: ScriptedConfirm,
        ) -> Self {
            let mut host = HostController::new(store, fs, picker, dialog, RecordingNotices::new());
            let seed = match host.activate() {
                Activation::Created { seed, .. } => seed,
                Activation::Revealed { .. } => PanelSeed {
                    pairs: Vec::new(),
                    last_file: None,
                    strip_comments: false,
                },
            };
            let panel = PanelController::hydrate(seed.pairs, seed.last_file, seed.strip_comments);
            Self {
                panel,
                host,
                clock: TickClock::new(),
            }
        }

        /// Pumps every outgoing panel command through the wire to the host
        /// and every host reply back, until the panel's outbox drains
        ///
        /// Each message really is encoded to bytes and decoded on the far
        /// side; a schema mismatch fails the test here, not in production.
        pub fn pump(&mut self) {
            loop {
                let commands = self.panel.take_outgoing();
                if commands.is_empty() {
                    break;
                }

                let mut to_host = MessageQueue::with_capacity(MAILBOX_CAPACITY);
                for command in &commands {
                    let bytes = encode_command(command).expect("encodable command");
                    to_host.push(bytes).expect("mailbox capacity");
                }

                let mut to_panel = MessageQueue::with_capacity(MAILBOX_CAPACITY);
                while let Some(bytes) = to_host.pop() {
                    let command = decode_command(&bytes).expect("decodable command");
                    let replies = self.host.dispatch(command).expect("open session");
                    for reply in &replies {
                        let bytes = encode_host_message(reply).expect("encodable reply");
                        to_panel.push(bytes).expect("mailbox capacity");
                    }
                }

                while let Some(bytes) = to_panel.pop() {
                    let message = decode_host_message(&bytes).expect("decodable reply");
                    self.panel.on_host_message(message);
                }
            }
        }

        /// Advances the shared clock and lets the panel expire stale requests
        pub fn advance(&mut self, ticks: u64) {
            self.clock.advance(ticks);
            self.panel.on_tick(self.clock.now());
        }
    }
}
