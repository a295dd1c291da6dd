//! Color theme for the tree view and overlays.
//!
//! Every color can be overridden from the config file by name
//! (e.g. "yellow", "#1e90ff"); unknown values fall back to the default.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Resolved theme used by the widgets
#[derive(Debug, Clone)]
pub struct Theme {
    // Tree rows
    pub file_normal: Color,
    pub file_directory: Color,
    pub file_marked: Color,
    /// Entry currently on the cut clipboard
    pub file_cut: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Dialogs
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_title: Color,
    pub dialog_text: Color,
    pub dialog_input_bg: Color,
    pub dialog_input_fg: Color,
    /// Delete/replace confirmations
    pub danger_bg: Color,
    pub danger_border: Color,
    pub list_selected_bg: Color,
    pub list_selected_fg: Color,

    // Help overlay
    pub help_bg: Color,
    pub help_fg: Color,
    pub help_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            file_normal: Color::Gray,
            file_directory: Color::LightBlue,
            file_marked: Color::Yellow,
            file_cut: Color::DarkGray,
            cursor_bg: Color::Cyan,
            cursor_fg: Color::Black,

            status_bg: Color::DarkGray,
            status_fg: Color::White,

            dialog_bg: Color::Blue,
            dialog_border: Color::White,
            dialog_title: Color::White,
            dialog_text: Color::Gray,
            dialog_input_bg: Color::Black,
            dialog_input_fg: Color::White,
            danger_bg: Color::Red,
            danger_border: Color::LightRed,
            list_selected_bg: Color::Cyan,
            list_selected_fg: Color::Black,

            help_bg: Color::Blue,
            help_fg: Color::White,
            help_highlight: Color::Yellow,
        }
    }
}

/// Theme overrides as they appear in config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub file: Option<String>,
    pub directory: Option<String>,
    pub marked: Option<String>,
    pub cursor_bg: Option<String>,
    pub cursor_fg: Option<String>,
    pub status_bg: Option<String>,
    pub status_fg: Option<String>,
    pub dialog_bg: Option<String>,
    pub dialog_border: Option<String>,
    pub danger_bg: Option<String>,
    pub danger_border: Option<String>,
    pub help_bg: Option<String>,
}

impl Theme {
    /// Apply config overrides on top of the default palette
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();
        apply(&mut theme.file_normal, &config.file);
        apply(&mut theme.file_directory, &config.directory);
        apply(&mut theme.file_marked, &config.marked);
        apply(&mut theme.cursor_bg, &config.cursor_bg);
        apply(&mut theme.cursor_fg, &config.cursor_fg);
        apply(&mut theme.status_bg, &config.status_bg);
        apply(&mut theme.status_fg, &config.status_fg);
        apply(&mut theme.dialog_bg, &config.dialog_bg);
        apply(&mut theme.dialog_border, &config.dialog_border);
        apply(&mut theme.danger_bg, &config.danger_bg);
        apply(&mut theme.danger_border, &config.danger_border);
        apply(&mut theme.help_bg, &config.help_bg);
        theme
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    if let Some(value) = value
        && let Ok(color) = value.parse::<Color>()
    {
        *slot = color;
    }
}
