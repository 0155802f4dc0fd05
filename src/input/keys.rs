//! Keyboard event mapping and input event types.

use crate::board::{Direction, QuadrantId};
use crate::editor::Mode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (create a note, commit it,
/// switch quadrants) rather than specific key presses, so the mapping
/// per mode stays in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Create a note in the active quadrant
    NewNote,
    /// Advance the active quadrant clockwise and focus it
    CycleQuadrant,
    /// Focus a specific quadrant
    FocusQuadrant(QuadrantId),
    /// Focus the currently active quadrant
    FocusActive,
    /// Move the selection to a neighboring quadrant
    MoveSelection(Direction),
    /// Open the reset confirmation dialog
    OpenResetPrompt,
    /// Confirm the pending reset
    ConfirmReset,
    /// Abort the pending reset
    CancelReset,
    /// Toggle the help overlay
    ToggleHelp,
    /// Commit the focused note
    Commit,
    /// Delete the focused note if its text is blank, otherwise delete a
    /// character like an ordinary backspace
    DeleteIfBlank,
    /// Delete the focused note unconditionally
    DeleteNote,
    /// Insert the system clipboard as plain text
    PasteClipboard,
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a line break at the cursor
    InsertNewline,
    /// Delete the character before the cursor
    Backspace,
    /// Move the text cursor left
    CursorLeft,
    /// Move the text cursor right
    CursorRight,
    /// Move the text cursor to the start of the note
    CursorHome,
    /// Move the text cursor to the end of the note
    CursorEnd,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent based on the current mode.
///
/// The Alt chords are global: they fire while navigating and while a
/// note is being edited, mirroring a single unconditional listener.
/// Only the modal reset dialog blocks them. Everything else is
/// mode-specific:
///
/// - Board mode: digits focus quadrants, arrows move the selection,
///   `r` opens the reset prompt, `q` quits
/// - Edit mode: text editing keys, `Ctrl`-chords for commit/delete,
///   Esc commits
/// - ConfirmReset mode: `y`/Enter confirms, `n`/Esc aborts
///
/// # Examples
///
/// ```
/// use notequill::editor::Mode;
/// use notequill::input::keys::{map_key_event, InputEvent};
/// use termion::event::{Event, Key};
///
/// let event = Event::Key(Key::Alt('q'));
/// assert_eq!(map_key_event(event, Mode::Board), InputEvent::CycleQuadrant);
/// ```
pub fn map_key_event(event: Event, mode: Mode) -> InputEvent {
    // We only care about key events; mouse is handled separately.
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    // Global chords, checked before any mode-specific mapping. The
    // reset dialog is truly modal and sees none of them.
    if mode != Mode::ConfirmReset {
        match key {
            Key::Alt('\r') | Key::Alt('\n') => return InputEvent::NewNote,
            Key::Alt('q') => return InputEvent::CycleQuadrant,
            Key::Alt(digit @ '1'..='4') => {
                if let Some(quadrant) = QuadrantId::from_digit(digit) {
                    return InputEvent::FocusQuadrant(quadrant);
                }
            }
            _ => {}
        }
    }

    match mode {
        Mode::Board => match key {
            Key::Char('q') => InputEvent::Quit,
            Key::Char(digit @ '1'..='4') => QuadrantId::from_digit(digit)
                .map(InputEvent::FocusQuadrant)
                .unwrap_or(InputEvent::Unknown),
            Key::Char('\n') => InputEvent::FocusActive,
            Key::Left => InputEvent::MoveSelection(Direction::Left),
            Key::Right => InputEvent::MoveSelection(Direction::Right),
            Key::Up => InputEvent::MoveSelection(Direction::Up),
            Key::Down => InputEvent::MoveSelection(Direction::Down),
            Key::Char('r') | Key::Char('R') => InputEvent::OpenResetPrompt,
            Key::Char('?') | Key::F(1) => InputEvent::ToggleHelp,
            _ => InputEvent::Unknown,
        },
        Mode::Edit => match key {
            // CSI-u capable terminals report Ctrl+Enter distinctly.
            Key::Ctrl('\n') | Key::Ctrl('\r') => InputEvent::Commit,
            Key::Esc => InputEvent::Commit,
            // Terminals send BS (0x08) for Ctrl+Backspace.
            Key::Ctrl('h') => InputEvent::DeleteIfBlank,
            Key::Ctrl('d') => InputEvent::DeleteNote,
            Key::Ctrl('v') => InputEvent::PasteClipboard,
            Key::Char('\n') => InputEvent::InsertNewline,
            Key::Backspace => InputEvent::Backspace,
            Key::Left => InputEvent::CursorLeft,
            Key::Right => InputEvent::CursorRight,
            Key::Home => InputEvent::CursorHome,
            Key::End => InputEvent::CursorEnd,
            Key::Char(c) => InputEvent::InsertChar(c),
            _ => InputEvent::Unknown,
        },
        Mode::ConfirmReset => match key {
            Key::Char('y') | Key::Char('Y') | Key::Char('\n') => InputEvent::ConfirmReset,
            Key::Char('n') | Key::Char('N') | Key::Esc => InputEvent::CancelReset,
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_chords_fire_while_editing_too() {
        for mode in [Mode::Board, Mode::Edit] {
            assert_eq!(
                map_key_event(Event::Key(Key::Alt('q')), mode),
                InputEvent::CycleQuadrant
            );
            assert_eq!(
                map_key_event(Event::Key(Key::Alt('\r')), mode),
                InputEvent::NewNote
            );
        }
    }

    #[test]
    fn test_alt_digits_use_visual_mapping() {
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('3')), Mode::Board),
            InputEvent::FocusQuadrant(QuadrantId::Q4)
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('4')), Mode::Edit),
            InputEvent::FocusQuadrant(QuadrantId::Q3)
        );
    }

    #[test]
    fn test_board_mode_digits() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('1')), Mode::Board),
            InputEvent::FocusQuadrant(QuadrantId::Q1)
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('3')), Mode::Board),
            InputEvent::FocusQuadrant(QuadrantId::Q4)
        );
    }

    #[test]
    fn test_board_mode_quit() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), Mode::Board),
            InputEvent::Quit
        );
    }

    #[test]
    fn test_edit_mode_types_digits_as_text() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('1')), Mode::Edit),
            InputEvent::InsertChar('1')
        );
        // 'q' is just a letter while editing.
        assert_eq!(
            map_key_event(Event::Key(Key::Char('q')), Mode::Edit),
            InputEvent::InsertChar('q')
        );
    }

    #[test]
    fn test_edit_mode_commit_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), Mode::Edit),
            InputEvent::Commit
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Ctrl('\n')), Mode::Edit),
            InputEvent::Commit
        );
    }

    #[test]
    fn test_edit_mode_conditional_delete() {
        assert_eq!(
            map_key_event(Event::Key(Key::Ctrl('h')), Mode::Edit),
            InputEvent::DeleteIfBlank
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Backspace), Mode::Edit),
            InputEvent::Backspace
        );
    }

    #[test]
    fn test_confirm_mode_keys() {
        assert_eq!(
            map_key_event(Event::Key(Key::Char('y')), Mode::ConfirmReset),
            InputEvent::ConfirmReset
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Esc), Mode::ConfirmReset),
            InputEvent::CancelReset
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Char('x')), Mode::ConfirmReset),
            InputEvent::Unknown
        );
    }

    #[test]
    fn test_mouse_event_is_unknown_here() {
        use termion::event::{MouseButton, MouseEvent};
        let event = Event::Mouse(MouseEvent::Press(MouseButton::Left, 1, 1));
        assert_eq!(map_key_event(event, Mode::Board), InputEvent::Unknown);
    }
}
