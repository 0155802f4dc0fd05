//! Theme system for notequill.
//!
//! This module provides the theme infrastructure: color definitions
//! ([`colors`] module), the [`Theme`] data structure, and built-in
//! theme access via [`get_builtin_theme`].
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI-based dark theme that adapts to the
//!   terminal's palette
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//!
//! # Examples
//!
//! ```
//! use notequill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the notequill terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name.
///
/// # Returns
///
/// - `Some(Theme)` if the theme name is recognized
/// - `None` if the theme name is not found
///
/// # Examples
///
/// ```
/// use notequill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("gruvbox-dark").is_some());
/// assert!(get_builtin_theme("no-such-theme").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        _ => return None,
    };

    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<String> {
    vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "gruvbox-dark".to_string(),
    ]
}
