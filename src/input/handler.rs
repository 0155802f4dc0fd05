//! Input event handler for polling and processing terminal events.

use super::keys::{map_key_event, InputEvent};
use crate::editor::state::{BoardState, MessageLevel};
use crate::store::saver::reset_board;
use crate::ui::board_view;
use anyhow::Result;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, Key, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};

/// Handles terminal input events and updates the board state.
///
/// The handler polls for termion events, converts key events to
/// high-level [`InputEvent`]s, and applies them. Mouse events are
/// interpreted directly against the last rendered layout.
pub struct InputHandler {
    /// Event source iterator (maintains position in the input buffer,
    /// preventing character loss during rapid input).
    events: Events<Stdin>,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: io::stdin().events(),
        }
    }

    /// Polls for a terminal event.
    ///
    /// Returns `Some(Event)` if an event occurred, `None` otherwise.
    /// The timeout matches the render tick; the stored events iterator
    /// does the actual waiting.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if let Some(event_result) = self.events.next() {
            return Ok(Some(event_result?));
        }
        Ok(None)
    }

    /// Handles a terminal event and updates the board state.
    ///
    /// Returns `Ok(true)` if the application should quit.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use notequill::board::Board;
    /// use notequill::editor::BoardState;
    /// use notequill::input::InputHandler;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = BoardState::new(Board::new(), "board.json".into());
    /// let should_quit = handler
    ///     .handle_event(Event::Key(Key::Char('q')), &mut state)
    ///     .unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut BoardState) -> Result<bool> {
        if let Event::Mouse(mouse_event) = event {
            if state.enable_mouse() {
                handle_mouse(mouse_event, state);
            }
            return Ok(false);
        }

        // The help overlay swallows keys until dismissed.
        if state.show_help() {
            if let Event::Key(key) = event {
                match key {
                    Key::Esc | Key::Char('?') | Key::Char('q') | Key::F(1) => state.close_help(),
                    _ => {}
                }
            }
            return Ok(false);
        }

        if matches!(event, Event::Key(_)) {
            state.clear_message();
        }

        match map_key_event(event, state.mode()) {
            InputEvent::Quit => return Ok(true),
            InputEvent::NewNote => state.create_note(state.active_quadrant()),
            InputEvent::CycleQuadrant => state.cycle_clockwise(),
            InputEvent::FocusQuadrant(quadrant) => state.focus_quadrant(quadrant),
            InputEvent::FocusActive => state.focus_quadrant(state.active_quadrant()),
            InputEvent::MoveSelection(direction) => {
                state.select_quadrant(state.active_quadrant().neighbor(direction));
            }
            InputEvent::OpenResetPrompt => state.open_reset_prompt(),
            InputEvent::ConfirmReset => confirm_reset(state),
            InputEvent::CancelReset => state.cancel_reset(),
            InputEvent::ToggleHelp => state.toggle_help(),
            InputEvent::Commit => state.commit_focused(),
            InputEvent::DeleteIfBlank => {
                // Ctrl+Backspace deletes the note only when it is blank;
                // otherwise it behaves as ordinary text deletion.
                if state.focused_note_is_blank() {
                    state.delete_focused();
                } else {
                    state.backspace();
                }
            }
            InputEvent::DeleteNote => state.delete_focused(),
            InputEvent::PasteClipboard => paste_from_clipboard(state),
            InputEvent::InsertChar(c) => state.insert_char(c),
            InputEvent::InsertNewline => state.insert_newline(),
            InputEvent::Backspace => state.backspace(),
            InputEvent::CursorLeft => state.move_cursor_left(),
            InputEvent::CursorRight => state.move_cursor_right(),
            InputEvent::CursorHome => state.move_cursor_home(),
            InputEvent::CursorEnd => state.move_cursor_end(),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }
}

/// Applies a mouse event against the last rendered quadrant layout.
///
/// A left click selects the quadrant under the cursor; clicking a
/// committed note row opens that note for editing. Clicking a note
/// that is already editable is a no-op. The wheel scrolls the note
/// list of the quadrant under the cursor.
fn handle_mouse(mouse_event: MouseEvent, state: &mut BoardState) {
    match mouse_event {
        MouseEvent::Press(MouseButton::Left, x, y) => {
            // Termion mouse coordinates are 1-based.
            let (x, y) = (x.saturating_sub(1), y.saturating_sub(1));
            let Some(quadrant) = state.quadrant_at(x, y) else {
                return;
            };

            match board_view::note_at_position(state, quadrant, y) {
                Some(index) => {
                    let already_editing = state.editing() == Some((quadrant, index));
                    if !already_editing {
                        state.open_note(quadrant, index);
                    }
                }
                None => state.select_quadrant(quadrant),
            }
        }
        MouseEvent::Press(MouseButton::WheelUp, x, y) => {
            let (x, y) = (x.saturating_sub(1), y.saturating_sub(1));
            if let Some(quadrant) = state.quadrant_at(x, y) {
                state.scroll_up(quadrant, 3);
            }
        }
        MouseEvent::Press(MouseButton::WheelDown, x, y) => {
            let (x, y) = (x.saturating_sub(1), y.saturating_sub(1));
            if let Some(quadrant) = state.quadrant_at(x, y) {
                state.scroll_down(quadrant, 3);
            }
        }
        _ => {}
    }
}

/// Deletes the durable slot and clears the in-memory board.
fn confirm_reset(state: &mut BoardState) {
    match reset_board(state.board_path()) {
        Ok(()) => {
            state.apply_reset();
            state.set_message("All notes cleared".to_string(), MessageLevel::Info);
        }
        Err(err) => {
            state.cancel_reset();
            state.set_message(format!("Reset failed: {err:#}"), MessageLevel::Error);
        }
    }
}

/// Inserts the system clipboard contents as normalized plain text.
fn paste_from_clipboard(state: &mut BoardState) {
    let text = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text());
    match text {
        Ok(text) => state.insert_text(&normalize_paste(&text)),
        Err(_) => {
            state.set_message("Clipboard unavailable".to_string(), MessageLevel::Warning);
        }
    }
}

/// Normalizes pasted text to plain note content.
///
/// Line endings become LF and all other control characters are dropped;
/// notes hold plain text only, whatever the clipboard carried.
pub fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}
