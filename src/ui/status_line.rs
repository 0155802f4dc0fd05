//! Status line widget showing board state information.
//!
//! The status line shows:
//! - Current mode (BOARD, EDIT, CONFIRM)
//! - Active quadrant key and title
//! - Total note count
//! - Board file location
//!
//! Example status line: `BOARD | q1 Urgent · Important | 3 notes`

use crate::editor::state::BoardState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &BoardState, colors: &ThemeColors) {
    let quadrant = state.active_quadrant();
    let note_count = state.board().total_notes();
    let notes_word = if note_count == 1 { "note" } else { "notes" };

    let left = format!(
        "{} | {} {} | {} {}",
        state.mode(),
        quadrant.key(),
        quadrant.title(),
        note_count,
        notes_word
    );
    let right = format!("{}  ? help ", state.board_path().display());

    // Pad the middle so the right side hugs the edge.
    let total = area.width as usize;
    let used = left.chars().count() + right.chars().count();
    let padding = total.saturating_sub(used);

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);

    let paragraph = Paragraph::new(line).style(
        Style::default()
            .bg(colors.status_line_bg)
            .fg(colors.status_line_fg),
    );

    f.render_widget(paragraph, area);
}
