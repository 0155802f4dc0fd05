//! Integration tests for keyboard mapping and event handling.

use notequill::board::{Board, Note, QuadrantId};
use notequill::editor::state::BoardState;
use notequill::editor::Mode;
use notequill::input::keys::{map_key_event, InputEvent};
use notequill::input::InputHandler;
use std::path::PathBuf;
use termion::event::{Event, Key};

fn empty_state() -> BoardState {
    BoardState::new(Board::new(), PathBuf::from("input-tests.json"))
}

#[test]
fn test_alt_chords_are_global() {
    for mode in [Mode::Board, Mode::Edit] {
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('q')), mode),
            InputEvent::CycleQuadrant
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('1')), mode),
            InputEvent::FocusQuadrant(QuadrantId::Q1)
        );
        assert_eq!(
            map_key_event(Event::Key(Key::Alt('\n')), mode),
            InputEvent::NewNote
        );
    }
}

#[test]
fn test_digit_chords_mirror_screen_layout() {
    assert_eq!(
        map_key_event(Event::Key(Key::Alt('3')), Mode::Board),
        InputEvent::FocusQuadrant(QuadrantId::Q4)
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Alt('4')), Mode::Board),
        InputEvent::FocusQuadrant(QuadrantId::Q3)
    );
}

#[test]
fn test_edit_mode_text_keys() {
    assert_eq!(
        map_key_event(Event::Key(Key::Char('a')), Mode::Edit),
        InputEvent::InsertChar('a')
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Char('\n')), Mode::Edit),
        InputEvent::InsertNewline
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Backspace), Mode::Edit),
        InputEvent::Backspace
    );
}

#[test]
fn test_cycle_chord_walks_clockwise_from_handler() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();

    let mut visited = Vec::new();
    for _ in 0..4 {
        handler
            .handle_event(Event::Key(Key::Alt('q')), &mut state)
            .unwrap();
        visited.push(state.active_quadrant());
    }

    assert_eq!(
        visited,
        vec![
            QuadrantId::Q2,
            QuadrantId::Q4,
            QuadrantId::Q3,
            QuadrantId::Q1
        ]
    );
}

#[test]
fn test_full_keyboard_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let mut handler = InputHandler::new();
    let mut state = BoardState::new(Board::new(), path);

    // Alt+2 focuses Q2; empty quadrant gets a fresh note.
    handler
        .handle_event(Event::Key(Key::Alt('2')), &mut state)
        .unwrap();
    assert_eq!(state.mode(), Mode::Edit);
    assert_eq!(state.board().len(QuadrantId::Q2), 1);

    // Type a note and commit with Esc.
    for c in "Call Bob".chars() {
        handler
            .handle_event(Event::Key(Key::Char(c)), &mut state)
            .unwrap();
    }
    handler
        .handle_event(Event::Key(Key::Esc), &mut state)
        .unwrap();

    assert_eq!(state.mode(), Mode::Board);
    assert_eq!(state.board().note(QuadrantId::Q2, 0).unwrap().text(), "Call Bob");
    assert!(state.is_dirty());
}

#[test]
fn test_commit_chord_while_editing() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();
    state.create_note(QuadrantId::Q1);
    state.insert_text("note body");

    handler
        .handle_event(Event::Key(Key::Ctrl('\n')), &mut state)
        .unwrap();

    assert_eq!(state.mode(), Mode::Board);
    assert!(!state.board().note(QuadrantId::Q1, 0).unwrap().is_editable());
}

#[test]
fn test_ctrl_backspace_is_conditional() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();
    state.create_note(QuadrantId::Q1);
    state.insert_text("x");

    // Non-blank: behaves as ordinary deletion.
    handler
        .handle_event(Event::Key(Key::Ctrl('h')), &mut state)
        .unwrap();
    assert_eq!(state.board().len(QuadrantId::Q1), 1);
    assert!(state.focused_note_is_blank());

    // Now blank: deletes the note.
    handler
        .handle_event(Event::Key(Key::Ctrl('h')), &mut state)
        .unwrap();
    assert!(state.board().is_empty(QuadrantId::Q1));
}

#[test]
fn test_unconditional_delete_chord() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();
    state.create_note(QuadrantId::Q3);
    state.insert_text("not blank");

    handler
        .handle_event(Event::Key(Key::Ctrl('d')), &mut state)
        .unwrap();
    assert!(state.board().is_empty(QuadrantId::Q3));
}

#[test]
fn test_new_note_chord_lands_in_last_touched_quadrant() {
    let mut handler = InputHandler::new();
    let mut board = Board::new();
    board.push(QuadrantId::Q4, Note::committed("existing"));
    let mut state = BoardState::new(board, PathBuf::from("input-tests.json"));

    // Touch Q4, then commit so no note has focus.
    handler
        .handle_event(Event::Key(Key::Alt('3')), &mut state)
        .unwrap();
    handler
        .handle_event(Event::Key(Key::Esc), &mut state)
        .unwrap();
    assert_eq!(state.active_quadrant(), QuadrantId::Q4);

    handler
        .handle_event(Event::Key(Key::Alt('\r')), &mut state)
        .unwrap();
    assert_eq!(state.board().len(QuadrantId::Q4), 2);
}

#[test]
fn test_arrow_selection_in_board_mode() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();

    handler
        .handle_event(Event::Key(Key::Right), &mut state)
        .unwrap();
    assert_eq!(state.active_quadrant(), QuadrantId::Q2);

    handler
        .handle_event(Event::Key(Key::Down), &mut state)
        .unwrap();
    assert_eq!(state.active_quadrant(), QuadrantId::Q4);

    // Selection alone never opens a note.
    assert_eq!(state.editing(), None);
}

#[test]
fn test_unknown_keys_do_nothing() {
    let mut handler = InputHandler::new();
    let mut state = empty_state();

    handler
        .handle_event(Event::Key(Key::Char('z')), &mut state)
        .unwrap();
    assert_eq!(state.board().total_notes(), 0);
    assert_eq!(state.mode(), Mode::Board);
}
