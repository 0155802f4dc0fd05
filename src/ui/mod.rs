//! UI module for the notequill terminal interface.
//!
//! This module provides the main UI structure for rendering the
//! terminal interface: the 2x2 quadrant grid, status line, message
//! area, and the help and reset-confirmation overlays.

pub mod board_view;
pub mod confirm_reset;
pub mod help_overlay;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::state::BoardState;
use crate::editor::Mode;
use crate::theme::Theme;

/// Main UI structure that manages terminal interface rendering.
///
/// The UI is composed of three areas: the quadrant board (top), a
/// status line, and a message area (bottom). Overlays render on top
/// when active.
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the
    /// theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// Draws the quadrant board, status line, and message area, then
    /// any active overlay. Rendering also records the quadrant layout
    /// in the state for mouse hit-testing and clamps scroll offsets.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut BoardState,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Quadrant board
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            board_view::render_board(f, chunks[0], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[1], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[2], state, &self.theme.colors);

            if state.mode() == Mode::ConfirmReset {
                confirm_reset::render_confirm_reset(f, &self.theme.colors);
            }

            if state.show_help() {
                help_overlay::render_help_overlay(f, &self.theme.colors);
            }
        })?;

        Ok(())
    }
}
