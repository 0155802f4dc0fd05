//! The persisted representation of a board.

use crate::board::{Board, Note, QuadrantId};
use serde::{Deserialize, Serialize};

/// The complete persisted form of a board: one ordered list of note
/// strings per quadrant key.
///
/// Only non-empty trimmed strings appear in a snapshot. Quadrant keys
/// absent from the stored JSON deserialize as empty lists, so partial
/// snapshots load cleanly.
///
/// # Examples
///
/// ```
/// use notequill::store::Snapshot;
///
/// let snapshot: Snapshot = serde_json::from_str(r#"{"q1": ["A"]}"#).unwrap();
/// assert_eq!(snapshot.q1, vec!["A".to_string()]);
/// assert!(snapshot.q2.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub q1: Vec<String>,
    #[serde(default)]
    pub q2: Vec<String>,
    #[serde(default)]
    pub q3: Vec<String>,
    #[serde(default)]
    pub q4: Vec<String>,
}

impl Snapshot {
    /// Builds a snapshot from the current board contents.
    ///
    /// Every note participates regardless of editing state; texts are
    /// trimmed and blank notes are dropped, so a blank note can never
    /// survive a save.
    pub fn from_board(board: &Board) -> Self {
        let collect = |quadrant: QuadrantId| {
            board
                .notes(quadrant)
                .iter()
                .map(|note| note.text().trim().to_string())
                .filter(|text| !text.is_empty())
                .collect()
        };

        Self {
            q1: collect(QuadrantId::Q1),
            q2: collect(QuadrantId::Q2),
            q3: collect(QuadrantId::Q3),
            q4: collect(QuadrantId::Q4),
        }
    }

    /// Rehydrates a board: one committed note per stored string, in
    /// stored order. Strings that trim to empty are skipped here too,
    /// in case the slot was edited by hand.
    pub fn into_board(self) -> Board {
        let mut board = Board::new();
        for (quadrant, texts) in [
            (QuadrantId::Q1, self.q1),
            (QuadrantId::Q2, self.q2),
            (QuadrantId::Q3, self.q3),
            (QuadrantId::Q4, self.q4),
        ] {
            for text in texts {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    board.push(quadrant, Note::committed(trimmed));
                }
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NoteState;

    #[test]
    fn test_from_board_trims_and_drops_blanks() {
        let mut board = Board::new();
        board.push(QuadrantId::Q1, Note::committed("  padded  "));
        board.push(QuadrantId::Q1, Note::new()); // blank, still editable
        board.push(QuadrantId::Q2, Note::committed("kept"));

        let snapshot = Snapshot::from_board(&board);
        assert_eq!(snapshot.q1, vec!["padded".to_string()]);
        assert_eq!(snapshot.q2, vec!["kept".to_string()]);
        assert!(snapshot.q3.is_empty());
    }

    #[test]
    fn test_from_board_includes_editable_notes_with_text() {
        let mut board = Board::new();
        let index = board.push(QuadrantId::Q3, Note::new());
        board
            .note_mut(QuadrantId::Q3, index)
            .unwrap()
            .text_mut()
            .push_str("in progress");

        let snapshot = Snapshot::from_board(&board);
        assert_eq!(snapshot.q3, vec!["in progress".to_string()]);
    }

    #[test]
    fn test_into_board_commits_everything() {
        let snapshot = Snapshot {
            q1: vec!["A".to_string()],
            q3: vec!["B".to_string(), "C".to_string()],
            ..Snapshot::default()
        };

        let board = snapshot.into_board();
        assert_eq!(board.len(QuadrantId::Q1), 1);
        assert_eq!(board.len(QuadrantId::Q3), 2);
        assert!(board.is_empty(QuadrantId::Q2));
        assert!(board.is_empty(QuadrantId::Q4));
        assert_eq!(board.note(QuadrantId::Q3, 0).unwrap().text(), "B");
        assert_eq!(board.note(QuadrantId::Q3, 1).unwrap().text(), "C");
        for q in QuadrantId::ALL {
            for note in board.notes(q) {
                assert_eq!(note.state(), NoteState::Committed);
            }
        }
    }

    #[test]
    fn test_into_board_skips_blank_strings() {
        let snapshot = Snapshot {
            q2: vec!["   ".to_string(), "real".to_string()],
            ..Snapshot::default()
        };
        let board = snapshot.into_board();
        assert_eq!(board.len(QuadrantId::Q2), 1);
        assert_eq!(board.note(QuadrantId::Q2, 0).unwrap().text(), "real");
    }

    #[test]
    fn test_deserialize_with_absent_keys() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"q2": ["x"]}"#).unwrap();
        assert!(snapshot.q1.is_empty());
        assert_eq!(snapshot.q2, vec!["x".to_string()]);
        assert!(snapshot.q3.is_empty());
        assert!(snapshot.q4.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut board = Board::new();
        board.push(QuadrantId::Q4, Note::committed("one"));
        board.push(QuadrantId::Q4, Note::committed("two"));
        board.push(QuadrantId::Q4, Note::committed("three"));

        let restored = Snapshot::from_board(&board).into_board();
        let texts: Vec<&str> = restored
            .notes(QuadrantId::Q4)
            .iter()
            .map(|n| n.text())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
