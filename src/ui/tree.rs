//! Tree view widget: renders the visible entry slice one row per entry.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::fs::tree::Entry;
use crate::state::view::Viewport;
use super::Theme;

pub struct TreeWidget<'a> {
    entries: &'a [Entry],
    view: Viewport,
    expanded: &'a BTreeSet<PathBuf>,
    marked: &'a BTreeSet<PathBuf>,
    /// Path pending on the cut clipboard, rendered dimmed
    cut: Option<&'a Path>,
    indent: usize,
    theme: &'a Theme,
}

impl<'a> TreeWidget<'a> {
    pub fn new(
        entries: &'a [Entry],
        view: Viewport,
        expanded: &'a BTreeSet<PathBuf>,
        marked: &'a BTreeSet<PathBuf>,
        cut: Option<&'a Path>,
        indent: usize,
        theme: &'a Theme,
    ) -> Self {
        Self { entries, view, expanded, marked, cut, indent, theme }
    }

    fn row_label(&self, entry: &Entry, is_dir: bool) -> String {
        let pad = " ".repeat(entry.depth * self.indent);
        let glyph = if !is_dir {
            "  "
        } else if self.expanded.contains(&entry.path) {
            "▾ "
        } else {
            "▸ "
        };
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.path.display().to_string());
        format!("{}{}{}", pad, glyph, name)
    }
}

impl Widget for TreeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for row in 0..area.height as usize {
            let index = self.view.scroll + row;
            let Some(entry) = self.entries.get(index) else {
                break;
            };
            let is_dir = entry.path.is_dir();
            let label = self.row_label(entry, is_dir);

            let mut style = if index == self.view.selected {
                Style::default().bg(self.theme.cursor_bg).fg(self.theme.cursor_fg)
            } else if self.marked.contains(&entry.path) {
                Style::default().fg(self.theme.file_marked)
            } else if is_dir {
                Style::default().fg(self.theme.file_directory)
            } else {
                Style::default().fg(self.theme.file_normal)
            };
            if self.cut == Some(entry.path.as_path()) {
                style = style.fg(self.theme.file_cut).add_modifier(Modifier::DIM);
            }

            let y = area.y + row as u16;
            // blank the full row so stale characters never bleed through
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_char(' ').set_style(style);
            }
            let label: String = label.chars().take(area.width as usize).collect();
            buf.set_string(area.x, y, &label, style);
        }
    }
}
