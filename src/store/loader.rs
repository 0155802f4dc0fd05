//! Board slot loading.
//!
//! Loading never fails: an absent slot means a fresh board, and a slot
//! that does not parse is treated the same way rather than surfaced as
//! an error.

use super::snapshot::Snapshot;
use crate::board::Board;
use std::path::Path;

/// Loads the board from the durable slot.
///
/// Returns an empty board when the file does not exist, cannot be read,
/// or does not contain a valid snapshot. Per-quadrant keys missing from
/// the snapshot rehydrate as empty quadrants.
///
/// # Examples
///
/// ```no_run
/// use notequill::store::load_board;
///
/// let board = load_board("board.json");
/// ```
pub fn load_board<P: AsRef<Path>>(path: P) -> Board {
    let contents = match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => contents,
        Err(_) => return Board::new(),
    };

    match serde_json::from_str::<Snapshot>(&contents) {
        Ok(snapshot) => snapshot.into_board(),
        Err(_) => Board::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::QuadrantId;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_is_empty_board() {
        let board = load_board("/nonexistent/notequill/board.json");
        assert_eq!(board.total_notes(), 0);
    }

    #[test]
    fn test_load_corrupt_json_is_empty_board() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json at all").unwrap();

        let board = load_board(file.path());
        assert_eq!(board.total_notes(), 0);
    }

    #[test]
    fn test_load_valid_snapshot() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"q1": ["A"], "q3": ["B", "C"]}}"#).unwrap();

        let board = load_board(file.path());
        assert_eq!(board.len(QuadrantId::Q1), 1);
        assert_eq!(board.len(QuadrantId::Q3), 2);
        assert!(board.is_empty(QuadrantId::Q2));
        assert!(board.is_empty(QuadrantId::Q4));
    }
}
