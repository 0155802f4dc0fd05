//! Input mode management.

use std::fmt;

/// The current input mode.
///
/// The mode decides how keystrokes are interpreted and is displayed in
/// the status line via the `Display` implementation.
///
/// # Examples
///
/// ```
/// use notequill::editor::Mode;
///
/// let mode = Mode::default();
/// assert_eq!(mode, Mode::Board);
/// assert_eq!(format!("{}", Mode::Edit), "EDIT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating between quadrants; no note has input focus.
    Board,
    /// A note is open for editing and receives text input.
    Edit,
    /// The reset confirmation dialog is open.
    ConfirmReset,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Board => write!(f, "BOARD"),
            Mode::Edit => write!(f, "EDIT"),
            Mode::ConfirmReset => write!(f, "CONFIRM"),
        }
    }
}

impl Default for Mode {
    /// The application starts in `Board` mode with no note focused.
    fn default() -> Self {
        Mode::Board
    }
}
