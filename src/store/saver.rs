//! Board slot saving and reset.
//!
//! Saves are full overwrites of the slot, written atomically (temp file
//! then rename) so the slot is never left half-written.

use super::snapshot::Snapshot;
use crate::board::Board;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves the full board snapshot to the durable slot.
///
/// The snapshot is recomputed from the board on every call: texts are
/// trimmed and blank notes excluded. The parent directory is created on
/// demand.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - Writing the temp file fails
/// - Renaming the temp file to the target fails
///
/// # Examples
///
/// ```no_run
/// use notequill::board::{Board, Note, QuadrantId};
/// use notequill::store::save_board;
///
/// let mut board = Board::new();
/// board.push(QuadrantId::Q1, Note::committed("Pay rent"));
/// save_board("board.json", &board).unwrap();
/// ```
pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create board directory")?;
        }
    }

    let snapshot = Snapshot::from_board(board);
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize board")?;

    write_file_atomic(path, json.as_bytes())
}

/// Deletes the durable slot entirely.
///
/// Used only after explicit user confirmation. A slot that is already
/// absent is not an error.
pub fn reset_board<P: AsRef<Path>>(path: P) -> Result<()> {
    match fs::remove_file(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).context("Failed to delete board file"),
    }
}

/// Writes data to a file atomically: temp file first, then rename.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
