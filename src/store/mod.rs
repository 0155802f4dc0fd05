//! Board persistence.
//!
//! The whole board persists as one JSON document in a single well-known
//! file (the durable slot). Every save is a full overwrite of the slot,
//! recomputed from the in-memory board; loads that find the slot absent
//! or unparseable yield an empty board rather than an error.

pub mod loader;
pub mod saver;
pub mod snapshot;

pub use loader::load_board;
pub use saver::{reset_board, save_board};
pub use snapshot::Snapshot;

use std::path::PathBuf;

/// Returns the default location of the board slot.
///
/// Uses `<data dir>/notequill/board.json`, e.g.
/// `~/.local/share/notequill/board.json` on Linux.
pub fn default_board_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|mut path| {
        path.push("notequill");
        path.push("board.json");
        path
    })
}
