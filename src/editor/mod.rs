//! Runtime state and mode management.
//!
//! The application follows a modal model: `Board` mode for navigating
//! quadrants, `Edit` mode while a note has input focus, and a
//! `ConfirmReset` mode for the destructive reset prompt.
//!
//! # Modules
//!
//! - `mode`: Mode enumeration
//! - `state`: The central `BoardState` container and all note
//!   lifecycle / quadrant navigation operations

pub mod mode;
pub mod state;

pub use mode::Mode;
pub use state::{BoardState, Message, MessageLevel};
