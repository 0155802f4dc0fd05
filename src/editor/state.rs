//! Board state management.
//!
//! This module provides the `BoardState` struct that manages all runtime
//! state for the application: the note board, the active quadrant, the
//! note currently open for editing, the dirty flag that drives saves,
//! and transient UI state (messages, selection pulse, cursor blink).
//!
//! All note lifecycle operations (create, commit, reopen, delete) and
//! all quadrant navigation operations (select, focus, clockwise cycle)
//! live here. Notes are addressed by `(quadrant, index)` pairs; the
//! operations keep the focused index valid across removals.
//!
//! # Example
//!
//! ```
//! use notequill::board::Board;
//! use notequill::board::QuadrantId;
//! use notequill::editor::{BoardState, Mode};
//!
//! let mut state = BoardState::new(Board::new(), "board.json".into());
//!
//! // Focusing an empty quadrant creates a fresh editable note.
//! state.focus_quadrant(QuadrantId::Q3);
//! assert_eq!(state.mode(), Mode::Edit);
//! assert_eq!(state.board().len(QuadrantId::Q3), 1);
//!
//! // Committing a blank note deletes it instead.
//! state.commit_focused();
//! assert!(state.board().is_empty(QuadrantId::Q3));
//! ```

use super::mode::Mode;
use crate::board::{Board, Note, NoteState, QuadrantId};
use ratatui::layout::Rect;
use std::path::{Path, PathBuf};

/// Ticks of the 100ms poll cadence a selection pulse lasts (300ms).
const PULSE_TICKS: u8 = 3;

/// Ticks between cursor blink toggles.
const BLINK_TICKS: u8 = 5;

/// A message to display in the message area.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Manages the complete runtime state of the note board.
pub struct BoardState {
    board: Board,
    board_path: PathBuf,
    active: QuadrantId,
    mode: Mode,
    /// The note with input focus, when in `Edit` mode.
    editing: Option<(QuadrantId, usize)>,
    /// Text cursor as a character offset into the focused note.
    cursor: usize,
    dirty: bool,
    message: Option<Message>,
    pulse: Option<QuadrantId>,
    pulse_ticks: u8,
    cursor_visible: bool,
    cursor_blink_ticks: u8,
    show_help: bool,
    enable_mouse: bool,
    scroll: [usize; 4],
    quadrant_areas: [Rect; 4],
}

impl BoardState {
    /// Creates a new state around a (possibly rehydrated) board.
    ///
    /// The active quadrant starts at `Q1` and no note is focused.
    pub fn new(board: Board, board_path: PathBuf) -> Self {
        Self {
            board,
            board_path,
            active: QuadrantId::Q1,
            mode: Mode::Board,
            editing: None,
            cursor: 0,
            dirty: false,
            message: None,
            pulse: None,
            pulse_ticks: 0,
            cursor_visible: true,
            cursor_blink_ticks: 0,
            show_help: false,
            enable_mouse: true,
            scroll: [0; 4],
            quadrant_areas: [Rect::default(); 4],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_path(&self) -> &Path {
        &self.board_path
    }

    pub fn active_quadrant(&self) -> QuadrantId {
        self.active
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The `(quadrant, index)` of the note with input focus, if any.
    pub fn editing(&self) -> Option<(QuadrantId, usize)> {
        self.editing
    }

    /// Character offset of the text cursor within the focused note.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // Quadrant navigation
    // ------------------------------------------------------------------

    /// Makes a quadrant active and starts its selection pulse.
    ///
    /// Does not change note focus.
    pub fn select_quadrant(&mut self, quadrant: QuadrantId) {
        self.active = quadrant;
        self.pulse = Some(quadrant);
        self.pulse_ticks = PULSE_TICKS;
    }

    /// Makes a quadrant active and ensures a note is being worked on.
    ///
    /// The last note in the quadrant is opened for editing (committed
    /// notes are reopened, editable notes just refocused). An empty
    /// quadrant gets a fresh note instead.
    pub fn focus_quadrant(&mut self, quadrant: QuadrantId) {
        self.select_quadrant(quadrant);
        match self.board.last_index(quadrant) {
            Some(last) => self.open_note(quadrant, last),
            None => self.create_note(quadrant),
        }
    }

    /// Advances the active quadrant in visual clockwise order and
    /// focuses the result.
    pub fn cycle_clockwise(&mut self) {
        self.focus_quadrant(self.active.next_clockwise());
    }

    /// Returns true while the quadrant's selection pulse is running.
    pub fn is_pulsing(&self, quadrant: QuadrantId) -> bool {
        self.pulse == Some(quadrant) && self.pulse_ticks > 0
    }

    // ------------------------------------------------------------------
    // Note lifecycle
    // ------------------------------------------------------------------

    /// Appends a fresh empty note to a quadrant and gives it focus.
    ///
    /// The new note starts editable; the quadrant becomes active.
    pub fn create_note(&mut self, quadrant: QuadrantId) {
        let index = self.board.push(quadrant, Note::new());
        self.active = quadrant;
        self.enter_edit(quadrant, index);
    }

    /// Opens an existing note for editing.
    ///
    /// Committed notes are reopened; already-editable notes are just
    /// refocused. The cursor lands at the end of the text. Nothing is
    /// persisted, since no content changed yet.
    pub fn open_note(&mut self, quadrant: QuadrantId, index: usize) {
        let Some(note) = self.board.note_mut(quadrant, index) else {
            return;
        };
        if note.state() == NoteState::Committed {
            note.reopen();
        }
        self.active = quadrant;
        self.enter_edit(quadrant, index);
    }

    /// Commits the focused note.
    ///
    /// Non-blank text is trimmed and the note becomes read-only; blank
    /// text deletes the note instead. Either way the board is marked
    /// dirty so the snapshot gets rewritten.
    pub fn commit_focused(&mut self) {
        let Some((quadrant, index)) = self.editing else {
            return;
        };
        let Some(note) = self.board.note_mut(quadrant, index) else {
            self.leave_edit();
            return;
        };

        if note.is_blank() {
            self.board.remove(quadrant, index);
        } else {
            note.commit();
        }
        self.leave_edit();
        self.mark_dirty();
    }

    /// Deletes the focused note unconditionally.
    ///
    /// If the quadrant still has notes afterwards, the new last note
    /// takes focus: committed notes are reopened for editing, editable
    /// ones just refocused. Deleting the last remaining note leaves the
    /// quadrant empty with nothing focused.
    pub fn delete_focused(&mut self) {
        let Some((quadrant, index)) = self.editing else {
            return;
        };
        self.delete_note(quadrant, index);
    }

    /// Deletes a note by position and refocuses the quadrant's tail.
    pub fn delete_note(&mut self, quadrant: QuadrantId, index: usize) {
        if self.board.remove(quadrant, index).is_none() {
            return;
        }
        self.mark_dirty();

        match self.board.last_index(quadrant) {
            Some(last) => self.open_note(quadrant, last),
            None => self.leave_edit(),
        }
    }

    /// Returns true when the focused note's text trims to empty.
    pub fn focused_note_is_blank(&self) -> bool {
        match self.editing {
            Some((quadrant, index)) => self
                .board
                .note(quadrant, index)
                .map(Note::is_blank)
                .unwrap_or(false),
            None => false,
        }
    }

    /// Clears the whole board after the slot has been reset.
    ///
    /// Leaves the dirty flag alone: the slot was just deleted and an
    /// immediate re-save would recreate it.
    pub fn apply_reset(&mut self) {
        self.board.clear();
        self.active = QuadrantId::Q1;
        self.scroll = [0; 4];
        self.leave_edit();
    }

    fn enter_edit(&mut self, quadrant: QuadrantId, index: usize) {
        self.cursor = self
            .board
            .note(quadrant, index)
            .map(|note| note.text().chars().count())
            .unwrap_or(0);
        self.editing = Some((quadrant, index));
        self.mode = Mode::Edit;
        self.reset_cursor_blink();
    }

    fn leave_edit(&mut self) {
        self.editing = None;
        self.cursor = 0;
        self.mode = Mode::Board;
    }

    // ------------------------------------------------------------------
    // Text editing
    // ------------------------------------------------------------------

    /// Inserts a character at the cursor of the focused note.
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(note) = self.focused_note_mut() {
            let offset = byte_offset(note.text(), cursor);
            note.text_mut().insert(offset, c);
            self.cursor += 1;
            self.reset_cursor_blink();
        }
    }

    /// Inserts a line break at the cursor. Notes are multi-line plain
    /// text.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Inserts already-normalized plain text at the cursor.
    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        if let Some(note) = self.focused_note_mut() {
            let start = byte_offset(note.text(), cursor - 1);
            note.text_mut().remove(start);
            self.cursor -= 1;
            self.reset_cursor_blink();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.reset_cursor_blink();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(note) = self.focused_note() {
            if self.cursor < note.text().chars().count() {
                self.cursor += 1;
                self.reset_cursor_blink();
            }
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
        self.reset_cursor_blink();
    }

    pub fn move_cursor_end(&mut self) {
        if let Some(note) = self.focused_note() {
            self.cursor = note.text().chars().count();
            self.reset_cursor_blink();
        }
    }

    fn focused_note(&self) -> Option<&Note> {
        self.editing
            .and_then(|(quadrant, index)| self.board.note(quadrant, index))
    }

    fn focused_note_mut(&mut self) -> Option<&mut Note> {
        let (quadrant, index) = self.editing?;
        self.board.note_mut(quadrant, index)
    }

    // ------------------------------------------------------------------
    // Reset prompt
    // ------------------------------------------------------------------

    /// Opens the reset confirmation dialog.
    pub fn open_reset_prompt(&mut self) {
        self.mode = Mode::ConfirmReset;
    }

    /// Closes the reset confirmation dialog without touching anything.
    pub fn cancel_reset(&mut self) {
        self.mode = Mode::Board;
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    // ------------------------------------------------------------------
    // Transient UI state
    // ------------------------------------------------------------------

    /// Advances the tick-driven effects: cursor blink and the
    /// fire-and-forget selection pulse. Called once per poll interval.
    pub fn tick(&mut self) {
        self.cursor_blink_ticks = self.cursor_blink_ticks.wrapping_add(1);
        if self.cursor_blink_ticks >= BLINK_TICKS {
            self.cursor_visible = !self.cursor_visible;
            self.cursor_blink_ticks = 0;
        }

        if self.pulse_ticks > 0 {
            self.pulse_ticks -= 1;
            if self.pulse_ticks == 0 {
                self.pulse = None;
            }
        }
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.cursor_blink_ticks = 0;
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn enable_mouse(&self) -> bool {
        self.enable_mouse
    }

    pub fn set_enable_mouse(&mut self, enable: bool) {
        self.enable_mouse = enable;
    }

    /// Scroll offset of a quadrant's note list, in display lines.
    pub fn scroll(&self, quadrant: QuadrantId) -> usize {
        self.scroll[quadrant.index()]
    }

    pub fn set_scroll(&mut self, quadrant: QuadrantId, offset: usize) {
        self.scroll[quadrant.index()] = offset;
    }

    pub fn scroll_up(&mut self, quadrant: QuadrantId, lines: usize) {
        let offset = &mut self.scroll[quadrant.index()];
        *offset = offset.saturating_sub(lines);
    }

    /// Scrolls down; the renderer clamps against content height.
    pub fn scroll_down(&mut self, quadrant: QuadrantId, lines: usize) {
        self.scroll[quadrant.index()] += lines;
    }

    /// Records where a quadrant was last rendered, for mouse hit tests.
    pub fn set_quadrant_area(&mut self, quadrant: QuadrantId, area: Rect) {
        self.quadrant_areas[quadrant.index()] = area;
    }

    pub fn quadrant_area(&self, quadrant: QuadrantId) -> Rect {
        self.quadrant_areas[quadrant.index()]
    }

    /// Finds the quadrant under a terminal cell, if any.
    pub fn quadrant_at(&self, x: u16, y: u16) -> Option<QuadrantId> {
        QuadrantId::ALL.into_iter().find(|q| {
            let area = self.quadrant_areas[q.index()];
            x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
        })
    }
}

/// Byte offset of a character index, clamped to the end of the string.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
