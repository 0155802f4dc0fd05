//! A single note and its editing state.

/// Editing state of a note.
///
/// Notes toggle between two states: `Editable` notes accept text input
/// and render highlighted; `Committed` notes are read-only until
/// reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    /// The note accepts text input.
    Editable,
    /// The note is read-only.
    Committed,
}

/// A single plain-text note owned by exactly one quadrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: String,
    state: NoteState,
}

impl Note {
    /// Creates a new empty note in the `Editable` state.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            state: NoteState::Editable,
        }
    }

    /// Creates a note with the given text, already committed.
    ///
    /// Used when rehydrating a board from a persisted snapshot.
    pub fn committed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: NoteState::Committed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn state(&self) -> NoteState {
        self.state
    }

    pub fn is_editable(&self) -> bool {
        self.state == NoteState::Editable
    }

    /// Returns true if the text is empty or whitespace-only.
    ///
    /// Blank notes are deleted on commit and never persisted.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Commits the note: trims the text in place and makes it read-only.
    ///
    /// Callers must check [`Note::is_blank`] first; committing a blank
    /// note is a deletion, which the board state handles.
    pub fn commit(&mut self) {
        self.text = self.text.trim().to_string();
        self.state = NoteState::Committed;
    }

    /// Reopens a committed note for editing, preserving its text.
    pub fn reopen(&mut self) {
        self.state = NoteState::Editable;
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
