//! Message area rendering for user feedback.

use crate::editor::state::{BoardState, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Shows the current message when one is set, otherwise a short hint
/// line with the most useful chords.
pub fn render_message_area(f: &mut Frame, area: Rect, state: &BoardState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        )])
    } else {
        Line::from(vec![Span::styled(
            "Alt+Enter new note · Alt+1..4 focus quadrant · Alt+q cycle · ? help",
            Style::default().fg(colors.border),
        )])
    };

    let paragraph = Paragraph::new(content).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}
