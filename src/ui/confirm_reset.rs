//! Reset confirmation dialog.
//!
//! Resetting deletes every note and the durable slot, so it always
//! asks first. This is the only destructive action in the application.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the centered reset confirmation dialog.
pub fn render_confirm_reset(f: &mut Frame, colors: &ThemeColors) {
    let area = centered_rect(50, f.area());

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Reset ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.error))
        .style(Style::default().bg(colors.background));

    let text = vec![
        Line::from(""),
        Line::from(Span::raw(
            "Reset all notes? This action cannot be undone.",
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y]",
                Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Yes    "),
            Span::styled(
                "[n]",
                Style::default().fg(colors.info).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" No"),
        ])
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(colors.note_text));

    f.render_widget(paragraph, area);
}

/// Returns a rect centered in `r` with a fixed dialog height.
fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let height = 6.min(r.height);
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let row = Rect::new(r.x, r.y + vertical_margin, r.width, height);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(row)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_confirm_dialog_renders() {
        let theme = get_builtin_theme("default-dark").unwrap();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_confirm_reset(f, &theme.colors))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(rendered.contains("Reset all notes?"));
        assert!(rendered.contains("[y]"));
    }
}
