//! Status bar widget

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::state::clipboard::ClipboardState;
use super::Theme;

/// One-line status bar: working directory and selection on the left,
/// clipboard and undo indicators on the right.
pub struct StatusBar<'a> {
    cwd: &'a Path,
    selection: Option<&'a Path>,
    size_label: Option<&'a str>,
    clipboard: &'a ClipboardState,
    undo_depth: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(cwd: &'a Path, clipboard: &'a ClipboardState, theme: &'a Theme) -> Self {
        Self {
            cwd,
            selection: None,
            size_label: None,
            clipboard,
            undo_depth: 0,
            theme,
        }
    }

    pub fn with_selection(mut self, selection: Option<&'a Path>, size_label: Option<&'a str>) -> Self {
        self.selection = selection;
        self.size_label = size_label;
        self
    }

    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let style = Style::default().bg(self.theme.status_bg).fg(self.theme.status_fg);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(style);
        }

        let mut left = format!(" {}", self.cwd.display());
        if let Some(selection) = self.selection {
            if let Some(name) = selection.file_name() {
                left.push_str(&format!("  ▸ {}", name.to_string_lossy()));
            }
            if let Some(size) = self.size_label {
                left.push_str(&format!(" ({})", size));
            }
        }

        let mut right = String::new();
        match self.clipboard {
            ClipboardState::Empty => {}
            ClipboardState::Copy(p) => {
                right.push_str(&format!("copy: {}  ", name_of(p)));
            }
            ClipboardState::Cut(p) => {
                right.push_str(&format!("cut: {}  ", name_of(p)));
            }
        }
        if self.undo_depth > 0 {
            right.push_str(&format!("undo: {} ", self.undo_depth));
        }

        let left: String = left.chars().take(area.width as usize).collect();
        buf.set_string(area.x, area.y, &left, style);

        let right_len = right.chars().count() as u16;
        if right_len > 0 && right_len < area.width {
            buf.set_string(area.x + area.width - right_len, area.y, &right, style);
        }
    }
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
