//! Full panel/host flow tests
//!
//! Each test drives a complete user flow through [`crate::harness`]: the
//! panel emits commands, the harness encodes them onto the wire, the host
//! dispatches, and the replies travel back the same way.

#[cfg(test)]
mod tests {
    use crate::harness::ProtocolLoop;
    use avs_host::persistence;
    use avs_host::sim::{MemFs, MemStore, ScriptedConfirm, ScriptedPicker};
    use avs_ipc::REPLY_TIMEOUT_TICKS;
    use avs_panel::PairField;
    use avs_types::{FileRef, ReplacementPair};

    fn pair(find: &str, replace: &str) -> ReplacementPair {
        ReplacementPair::new(find, replace)
    }

    fn quiet_rig() -> ProtocolLoop {
        ProtocolLoop::boot(MemFs::new(), ScriptedPicker::new(), ScriptedConfirm::new())
    }

    fn seeded_store(pairs: &[ReplacementPair], last_file: Option<&str>) -> MemStore {
        let mut store = MemStore::new();
        persistence::store_pairs(&mut store, pairs);
        if let Some(path) = last_file {
            persistence::store_last_file(&mut store, &FileRef::new(path));
        }
        store
    }

    #[test]
    fn test_edit_persists_exactly_once() {
        let mut rig = quiet_rig();
        let baseline = rig.host.store().writes();

        rig.panel.on_edit(0, PairField::Find, "Jean");
        rig.pump();

        assert_eq!(rig.host.store().writes(), baseline + 1);
        assert_eq!(persistence::load_pairs(rig.host.store()), vec![pair("Jean", "")]);
        assert_eq!(rig.panel.take_notices(), vec!["Changes saved".to_string()]);
    }

    #[test]
    fn test_reorder_to_same_position_writes_nothing() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("a", "1"), pair("b", "2")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );
        let baseline = rig.host.store().writes();

        rig.panel.on_reorder(1, 1);
        rig.pump();

        assert_eq!(rig.host.store().writes(), baseline);
    }

    #[test]
    fn test_reorder_round_trip_persists_permutation() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("a", "1"), pair("b", "2"), pair("c", "3")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );

        rig.panel.on_reorder(2, 0);
        rig.pump();

        assert_eq!(
            persistence::load_pairs(rig.host.store()),
            vec![pair("c", "3"), pair("a", "1"), pair("b", "2")]
        );
    }

    #[test]
    fn test_pick_file_flow_sets_and_persists() {
        let mut rig = ProtocolLoop::boot(
            MemFs::new(),
            ScriptedPicker::new().will_pick(Some(FileRef::new("/docs/letter.txt"))),
            ScriptedConfirm::new(),
        );

        let now = rig.clock.now();
        rig.panel.on_pick_file(now);
        rig.pump();

        assert_eq!(
            rig.panel.selected_file(),
            Some(&FileRef::new("/docs/letter.txt"))
        );
        assert_eq!(
            persistence::load_last_file(rig.host.store()),
            Some(FileRef::new("/docs/letter.txt"))
        );
    }

    #[test]
    fn test_last_file_is_reoffered_at_hydration() {
        let rig = ProtocolLoop::boot_with_store(
            seeded_store(&[], Some("/docs/letter.txt")),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );
        assert_eq!(
            rig.panel.selected_file(),
            Some(&FileRef::new("/docs/letter.txt"))
        );
    }

    #[test]
    fn test_delete_confirmed_over_wire() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("Jean", "John"), pair("b", "2")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new().will_answer(true),
        );

        let now = rig.clock.now();
        rig.panel.on_delete(0, now);
        rig.pump();

        assert_eq!(rig.panel.pairs(), &[pair("b", "2")]);
        assert_eq!(persistence::load_pairs(rig.host.store()), vec![pair("b", "2")]);
        // The confirmation prompt carried the row's find text.
        assert_eq!(
            rig.host.dialog().prompts(),
            &["Delete the replacement for \"Jean\"?".to_string()]
        );
    }

    #[test]
    fn test_delete_declined_over_wire() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("Jean", "John")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new().will_answer(false),
        );
        let baseline = rig.host.store().writes();

        let now = rig.clock.now();
        rig.panel.on_delete(0, now);
        rig.pump();

        assert_eq!(rig.panel.pairs(), &[pair("Jean", "John")]);
        assert_eq!(rig.host.store().writes(), baseline);
    }

    #[test]
    fn test_deleting_last_pair_refills_over_wire() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("only", "one")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new().will_answer(true),
        );

        let now = rig.clock.now();
        rig.panel.on_delete(0, now);
        rig.pump();

        assert_eq!(rig.panel.pairs().len(), 1);
        assert!(rig.panel.pairs()[0].is_blank());
    }

    #[test]
    fn test_timed_out_confirmation_is_discarded() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("Jean", "John")], None),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new().will_answer(true),
        );

        let now = rig.clock.now();
        rig.panel.on_delete(0, now);
        // The window closes before the host's reply reaches the panel.
        rig.advance(REPLY_TIMEOUT_TICKS);
        rig.pump();

        assert_eq!(rig.panel.pairs(), &[pair("Jean", "John")]);
        assert_eq!(rig.panel.requests_in_flight(), 0);
    }

    #[test]
    fn test_run_chains_pairs_in_order() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(
                &[pair("Jean", "John"), pair("John", "Jack")],
                Some("/docs/letter.txt"),
            ),
            MemFs::new().with_file("/docs/letter.txt", "Dear Jean, regards John"),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );

        rig.panel.on_run();
        rig.pump();

        // Pair two sees pair one's output, so every Jean ends up Jack.
        assert_eq!(
            rig.host.fs().contents(&FileRef::new("/docs/AVS-letter.txt")),
            Some("Dear Jack, regards Jack")
        );
        assert_eq!(
            rig.host.notices().infos(),
            &["AVS Replace wrote /docs/AVS-letter.txt".to_string()]
        );
    }

    #[test]
    fn test_run_strips_comments_before_substitution() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[], Some("/src/notes.txt")),
            MemFs::new().with_file("/src/notes.txt", "a /* drop */ b // drop2\nc <!-- drop3 --> d"),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );

        rig.panel.on_toggle_strip(true);
        rig.panel.on_run();
        rig.pump();

        assert_eq!(
            rig.host.fs().contents(&FileRef::new("/src/AVS-notes.txt")),
            Some("a  b \nc  d")
        );
    }

    #[test]
    fn test_run_without_file_never_reaches_the_host() {
        let mut rig = quiet_rig();
        rig.panel.on_run();
        rig.pump();

        assert!(rig.host.notices().infos().is_empty());
        assert!(rig.host.notices().errors().is_empty());
        assert_eq!(rig.panel.take_notices(), vec!["Choose a file first".to_string()]);
    }

    #[test]
    fn test_run_failure_reports_and_leaves_panel_usable() {
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&[pair("a", "b")], Some("/gone.txt")),
            MemFs::new(),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );

        rig.panel.on_run();
        rig.pump();

        assert_eq!(rig.host.notices().errors().len(), 1);
        assert!(rig.host.notices().errors()[0].contains("/gone.txt"));

        // The panel keeps working after the failed run.
        rig.panel.on_edit(0, PairField::Replace, "c");
        rig.pump();
        assert_eq!(persistence::load_pairs(rig.host.store()), vec![pair("a", "c")]);
    }

    #[test]
    fn test_run_output_matches_engine_exactly() {
        let source = "x /* c */ Jean\ty \nJean";
        let pairs = [pair("Jean", "John"), pair("John", "J.")];
        let mut rig = ProtocolLoop::boot_with_store(
            seeded_store(&pairs, Some("/w/in.txt")),
            MemFs::new().with_file("/w/in.txt", source),
            ScriptedPicker::new(),
            ScriptedConfirm::new(),
        );

        rig.panel.on_toggle_strip(true);
        rig.panel.on_run();
        rig.pump();

        let expected = avs_transform::apply(source, &pairs, true);
        assert_eq!(
            rig.host.fs().contents(&FileRef::new("/w/AVS-in.txt")),
            Some(expected.as_str())
        );
    }

    #[test]
    fn test_strip_toggle_round_trip_persists() {
        let mut rig = quiet_rig();
        rig.panel.on_toggle_strip(true);
        rig.pump();

        assert!(persistence::load_strip(rig.host.store()));
        assert_eq!(rig.panel.take_notices(), vec!["Changes saved".to_string()]);
    }
}
