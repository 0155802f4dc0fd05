//! Quadrant board rendering and layout hit-testing.
//!
//! The board renders as a 2x2 grid of bordered blocks. Each quadrant
//! lists its notes top to bottom in insertion order; the note being
//! edited renders highlighted with a visible cursor. Because mouse
//! clicks must map back to notes, the wrapping logic here is shared by
//! the renderer and by [`note_at_position`].

use crate::board::QuadrantId;
use crate::editor::state::BoardState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Gutter printed before a note's first display line.
const GUTTER_IDLE: &str = "- ";
/// Gutter for the note currently being edited.
const GUTTER_EDIT: &str = "> ";
/// Continuation gutter for wrapped lines.
const GUTTER_CONT: &str = "  ";

/// Renders the four quadrants into `area` and records their layout.
pub fn render_board(f: &mut Frame, area: Rect, state: &mut BoardState, colors: &ThemeColors) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let placements = [
        (QuadrantId::Q1, top[0]),
        (QuadrantId::Q2, top[1]),
        (QuadrantId::Q3, bottom[0]),
        (QuadrantId::Q4, bottom[1]),
    ];

    for (quadrant, quadrant_area) in placements {
        state.set_quadrant_area(quadrant, quadrant_area);
        render_quadrant(f, quadrant_area, quadrant, state, colors);
    }
}

fn render_quadrant(
    f: &mut Frame,
    area: Rect,
    quadrant: QuadrantId,
    state: &mut BoardState,
    colors: &ThemeColors,
) {
    let is_active = state.active_quadrant() == quadrant;
    let border_color = if state.is_pulsing(quadrant) {
        colors.border_pulse
    } else if is_active {
        colors.border_active
    } else {
        colors.border
    };

    let mut title_style = Style::default().fg(colors.quadrant_title);
    if is_active {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} [{}] ", quadrant.title(), quadrant.key()))
        .title_style(title_style)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.background));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = note_text_width(area);
    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = None;

    for (index, note) in state.board().notes(quadrant).iter().enumerate() {
        let is_focused = state.editing() == Some((quadrant, index));
        if is_focused {
            let (cursor_line, cursor_col) = cursor_display_position(note.text(), state.cursor(), width);
            focus_line = Some(lines.len() + cursor_line);
            lines.extend(editing_note_lines(
                note.text(),
                width,
                cursor_line,
                cursor_col,
                state.cursor_visible(),
                colors,
            ));
        } else {
            let style = if note.is_editable() {
                // Editable but unfocused: keep the highlight, no cursor.
                Style::default()
                    .fg(colors.note_editing_fg)
                    .bg(colors.note_editing_bg)
            } else {
                Style::default().fg(colors.note_text)
            };
            for (i, row) in wrap_text(note.text(), width).into_iter().enumerate() {
                let gutter = if i == 0 { GUTTER_IDLE } else { GUTTER_CONT };
                lines.push(Line::from(vec![
                    Span::styled(gutter, Style::default().fg(colors.border)),
                    Span::styled(row, style),
                ]));
            }
        }
    }

    // Clamp scroll to content, then pull the focused line into view.
    let viewport = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(viewport);
    let mut scroll = state.scroll(quadrant).min(max_scroll);
    if let Some(focus) = focus_line {
        if focus < scroll {
            scroll = focus;
        } else if focus >= scroll + viewport {
            scroll = focus + 1 - viewport;
        }
    }
    state.set_scroll(quadrant, scroll);

    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(viewport).collect();
    f.render_widget(
        Paragraph::new(visible).style(Style::default().bg(colors.background)),
        inner,
    );
}

/// Builds the display lines for the note being edited, including the
/// cursor cell.
fn editing_note_lines(
    text: &str,
    width: usize,
    cursor_line: usize,
    cursor_col: usize,
    cursor_visible: bool,
    colors: &ThemeColors,
) -> Vec<Line<'static>> {
    let base = Style::default()
        .fg(colors.note_editing_fg)
        .bg(colors.note_editing_bg);
    let cursor_style = Style::default()
        .bg(colors.cursor)
        .add_modifier(Modifier::REVERSED);

    let mut rows = wrap_text(text, width);
    // The cursor may sit one row past the wrapped text (end of a full
    // row, or an empty note).
    while rows.len() <= cursor_line {
        rows.push(String::new());
    }

    let mut lines = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        let gutter = if i == 0 { GUTTER_EDIT } else { GUTTER_CONT };
        let mut spans = vec![Span::styled(gutter, Style::default().fg(colors.gutter))];

        if i == cursor_line && cursor_visible {
            let chars: Vec<char> = row.chars().collect();
            let before: String = chars.iter().take(cursor_col).collect();
            let at: String = chars
                .get(cursor_col)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = chars.iter().skip(cursor_col + 1).collect();

            spans.push(Span::styled(before, base));
            spans.push(Span::styled(at, cursor_style));
            spans.push(Span::styled(after, base));
        } else {
            spans.push(Span::styled(row, base));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Character width available for note text inside a quadrant block,
/// accounting for the borders and the gutter.
pub fn note_text_width(area: Rect) -> usize {
    (area.width as usize).saturating_sub(4).max(1)
}

/// Wraps note text to the given character width.
///
/// Line breaks in the text are honored; longer lines wrap hard at the
/// width. Always yields at least one (possibly empty) row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            rows.push(chunk.iter().collect());
        }
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Maps a character-offset cursor to its `(row, column)` in the
/// wrapped display of the text.
pub fn cursor_display_position(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let mut row = 0;
    let mut col = 0;
    for c in text.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
            if col == width {
                row += 1;
                col = 0;
            }
        }
    }
    (row, col)
}

/// Finds which note occupies a terminal row inside a quadrant.
///
/// `row` is a 0-based screen row. Uses the quadrant layout recorded at
/// render time plus the same wrapping as the renderer, so clicks land
/// on the note the user sees.
pub fn note_at_position(state: &BoardState, quadrant: QuadrantId, row: u16) -> Option<usize> {
    let area = state.quadrant_area(quadrant);
    if area.width < 3 || area.height < 3 {
        return None;
    }

    let inner_top = area.y + 1;
    let inner_height = area.height - 2;
    if row < inner_top || row >= inner_top + inner_height {
        return None;
    }

    let target = (row - inner_top) as usize + state.scroll(quadrant);
    let width = note_text_width(area);

    let mut consumed = 0;
    for (index, note) in state.board().notes(quadrant).iter().enumerate() {
        let height = wrap_text(note.text(), width).len();
        if target < consumed + height {
            return Some(index);
        }
        consumed += height;
    }
    None
}
