//! Help overlay showing the keyboard chords.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders a centered help overlay listing every binding.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors) {
    let area = centered_rect(70, 80, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" NoteQuill Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.info))
        .style(Style::default().bg(colors.background));

    let key_style = Style::default().fg(colors.info);
    let section_style = Style::default()
        .fg(colors.quadrant_title)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("Anywhere", section_style)),
        Line::from(vec![
            Span::styled("  Alt+Enter     ", key_style),
            Span::raw("New note in the active quadrant"),
        ]),
        Line::from(vec![
            Span::styled("  Alt+q         ", key_style),
            Span::raw("Cycle quadrants clockwise"),
        ]),
        Line::from(vec![
            Span::styled("  Alt+1..4      ", key_style),
            Span::raw("Focus a quadrant (digits follow the layout)"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Board mode", section_style)),
        Line::from(vec![
            Span::styled("  1..4          ", key_style),
            Span::raw("Focus a quadrant"),
        ]),
        Line::from(vec![
            Span::styled("  Arrows        ", key_style),
            Span::raw("Move the selection"),
        ]),
        Line::from(vec![
            Span::styled("  Enter         ", key_style),
            Span::raw("Focus the selected quadrant"),
        ]),
        Line::from(vec![
            Span::styled("  r             ", key_style),
            Span::raw("Reset all notes (asks first)"),
        ]),
        Line::from(vec![
            Span::styled("  q             ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled("While editing a note", section_style)),
        Line::from(vec![
            Span::styled("  Ctrl+Enter    ", key_style),
            Span::raw("Commit the note (blank notes are deleted)"),
        ]),
        Line::from(vec![
            Span::styled("  Esc           ", key_style),
            Span::raw("Commit the note"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+Backspace", key_style),
            Span::raw(" Delete the note when it is blank"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+d        ", key_style),
            Span::raw("Delete the note"),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+v        ", key_style),
            Span::raw("Paste as plain text"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Mouse", section_style)),
        Line::from(vec![
            Span::styled("  Click         ", key_style),
            Span::raw("Select a quadrant / open a note"),
        ]),
        Line::from(vec![
            Span::styled("  Wheel         ", key_style),
            Span::raw("Scroll a quadrant's notes"),
        ]),
        Line::from(""),
        Line::from(Span::raw("  Press ? or Esc to close")),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(colors.note_text));

    f.render_widget(paragraph, area);
}

/// Returns a rect centered in `r` covering the given percentages.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
