//! Panel render frames
//!
//! The panel publishes its state as a structured frame. Presentation is
//! entirely the consumer's concern; the frame carries values, not markup.
//! The revision counter lets a consumer skip repaints when nothing
//! changed.

use serde::{Deserialize, Serialize};

use crate::controller::PanelController;

/// One rendered pair row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRow {
    pub find: String,
    pub replace: String,
}

/// A complete snapshot of the panel's visible state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelFrame {
    /// Monotonic revision; equal revisions mean identical frames
    pub revision: u64,
    /// Base name of the selected file, if any
    pub file_label: Option<String>,
    /// Strip-comments toggle state
    pub strip_comments: bool,
    /// Pair rows in list order (never empty)
    pub rows: Vec<PairRow>,
}

impl PanelFrame {
    /// Snapshots the controller's visible state
    pub fn snapshot(panel: &PanelController) -> Self {
        Self {
            revision: panel.revision(),
            file_label: panel.selected_file().map(|f| f.file_name().to_string()),
            strip_comments: panel.strip_comments(),
            rows: panel
                .pairs()
                .iter()
                .map(|p| PairRow {
                    find: p.find.clone(),
                    replace: p.replace.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avs_types::{FileRef, ReplacementPair};

    #[test]
    fn test_snapshot_reflects_state() {
        let panel = PanelController::hydrate(
            vec![ReplacementPair::new("Jean", "John")],
            Some(FileRef::new("/docs/letter.txt")),
            true,
        );
        let frame = PanelFrame::snapshot(&panel);

        assert_eq!(frame.revision, 1);
        assert_eq!(frame.file_label.as_deref(), Some("letter.txt"));
        assert!(frame.strip_comments);
        assert_eq!(
            frame.rows,
            vec![PairRow {
                find: "Jean".to_string(),
                replace: "John".to_string(),
            }]
        );
    }

    #[test]
    fn test_revision_advances_on_mutation() {
        let mut panel = PanelController::hydrate(vec![], None, false);
        let before = PanelFrame::snapshot(&panel);
        panel.on_add();
        let after = PanelFrame::snapshot(&panel);

        assert!(after.revision > before.revision);
        assert_eq!(after.rows.len(), 2);
    }

    #[test]
    fn test_no_file_renders_no_label() {
        let panel = PanelController::hydrate(vec![], None, false);
        let frame = PanelFrame::snapshot(&panel);
        assert!(frame.file_label.is_none());
        assert_eq!(frame.rows.len(), 1);
    }

    #[test]
    fn test_frame_serializes() {
        let panel = PanelController::hydrate(vec![], None, false);
        let frame = PanelFrame::snapshot(&panel);
        let json = serde_json::to_string(&frame).expect("serialize");
        let back: PanelFrame = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, frame);
    }
}
