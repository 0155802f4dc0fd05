//! Color definitions for notequill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all
//! color values used in the terminal UI, organized into board colors,
//! note colors, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a notequill theme.
///
/// # Examples
///
/// ```
/// use notequill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Active border: {:?}", dark.border_active);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Board colors
    /// Border color for inactive quadrants.
    pub border: Color,
    /// Border color for the active quadrant.
    pub border_active: Color,
    /// Border color while a quadrant's selection pulse runs.
    pub border_pulse: Color,
    /// Color for quadrant titles.
    pub quadrant_title: Color,

    // Note colors
    /// Text color for committed notes.
    pub note_text: Color,
    /// Foreground for the note currently being edited.
    pub note_editing_fg: Color,
    /// Background highlight for the note currently being edited.
    pub note_editing_bg: Color,
    /// Color for the text cursor.
    pub cursor: Color,
    /// Color for the gutter marker next to the edited note.
    pub gutter: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the board adapts to the user's terminal
    /// palette. The editing highlight leans gold, echoing a sticky-note
    /// marker.
    pub fn default_dark() -> Self {
        Self {
            border: Color::DarkGray,       // ANSI 8
            border_active: Color::LightBlue, // ANSI 12
            border_pulse: Color::Yellow,   // ANSI 3
            quadrant_title: Color::Gray,   // ANSI 7

            note_text: Color::Gray,
            note_editing_fg: Color::Black,
            note_editing_bg: Color::Yellow, // gold highlight while editing
            cursor: Color::LightBlue,
            gutter: Color::Yellow,

            background: Color::Reset, // use terminal's default background
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,      // ANSI 1
            warning: Color::Yellow, // ANSI 3
            info: Color::LightBlue, // ANSI 12
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            border: Color::Rgb(200, 200, 200),
            border_active: Color::Rgb(1, 132, 188),
            border_pulse: Color::Rgb(152, 104, 1),
            quadrant_title: Color::Rgb(56, 58, 66),

            note_text: Color::Rgb(56, 58, 66),
            note_editing_fg: Color::Rgb(56, 58, 66),
            note_editing_bg: Color::Rgb(255, 215, 0),
            cursor: Color::Rgb(1, 132, 188),
            gutter: Color::Rgb(152, 104, 1),

            background: Color::Rgb(250, 250, 250),
            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the gruvbox dark color scheme.
    ///
    /// Retro groove palette with warm, earthy tones.
    pub fn gruvbox_dark() -> Self {
        Self {
            border: Color::Rgb(80, 73, 69),
            border_active: Color::Rgb(131, 165, 152),
            border_pulse: Color::Rgb(250, 189, 47),
            quadrant_title: Color::Rgb(235, 219, 178),

            note_text: Color::Rgb(235, 219, 178),
            note_editing_fg: Color::Rgb(40, 40, 40),
            note_editing_bg: Color::Rgb(250, 189, 47),
            cursor: Color::Rgb(131, 165, 152),
            gutter: Color::Rgb(250, 189, 47),

            background: Color::Rgb(40, 40, 40),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }
}
