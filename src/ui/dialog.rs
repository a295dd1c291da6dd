//! Overlay widgets for the modal prompts.

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::state::prompt::FuzzyScope;
use super::dialog_helpers::DialogRenderer;
use super::Theme;

/// Single-line text input (rename, move, new file, new dir)
pub struct InputDialog<'a> {
    title: &'a str,
    context: String,
    value: &'a str,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> InputDialog<'a> {
    pub fn new(title: &'a str, target: &Path, value: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            title,
            context: target.display().to_string(),
            value,
            cursor,
            theme,
        }
    }
}

impl Widget for InputDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog) = DialogRenderer::center(area, 56, 6) else {
            return;
        };

        let bg = Style::default().bg(self.theme.dialog_bg);
        let border = Style::default().fg(self.theme.dialog_border).bg(self.theme.dialog_bg);
        let title = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_title)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_text);
        let input = Style::default()
            .bg(self.theme.dialog_input_bg)
            .fg(self.theme.dialog_input_fg);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        DialogRenderer::draw_title(dialog, buf, &format!(" {} ", self.title), title);

        let inner_width = dialog.width.saturating_sub(4) as usize;

        let context: String = self.context.chars().take(inner_width).collect();
        buf.set_string(dialog.x + 2, dialog.y + 1, &context, text);

        // input line with a one-cell cursor
        let input_y = dialog.y + 2;
        for x in dialog.x + 2..dialog.x + dialog.width - 2 {
            buf[(x, input_y)].set_char(' ').set_style(input);
        }
        let shown: String = self.value.chars().take(inner_width).collect();
        buf.set_string(dialog.x + 2, input_y, &shown, input);
        let cursor_x = dialog.x + 2 + (self.cursor.min(inner_width.saturating_sub(1))) as u16;
        buf[(cursor_x, input_y)].set_style(input.add_modifier(Modifier::REVERSED));

        buf.set_string(dialog.x + 2, dialog.y + 4, "Enter: confirm   Esc: cancel", text);
    }
}

/// Confirmation for delete and replace
pub struct ConfirmDialog<'a> {
    title: &'a str,
    question: String,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, target: &Path, theme: &'a Theme) -> Self {
        Self {
            title,
            question: target.display().to_string(),
            theme,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog) = DialogRenderer::center(area, 56, 5) else {
            return;
        };

        let bg = Style::default().bg(self.theme.danger_bg);
        let border = Style::default().fg(self.theme.danger_border).bg(self.theme.danger_bg);
        let title = Style::default()
            .bg(self.theme.danger_bg)
            .fg(self.theme.dialog_title)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.danger_bg).fg(self.theme.dialog_title);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        DialogRenderer::draw_title(dialog, buf, &format!(" {} ", self.title), title);

        let inner_width = dialog.width.saturating_sub(4) as usize;
        let question: String = self.question.chars().take(inner_width).collect();
        buf.set_string(dialog.x + 2, dialog.y + 1, &question, text);
        buf.set_string(dialog.x + 2, dialog.y + 3, "Enter: confirm   Esc: cancel", text);
    }
}

/// Pick-one list (drives, visit history)
pub struct ListDialog<'a> {
    title: &'a str,
    items: Vec<String>,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> ListDialog<'a> {
    pub fn new(title: &'a str, items: Vec<String>, selected: usize, theme: &'a Theme) -> Self {
        Self { title, items, selected, theme }
    }
}

impl Widget for ListDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.items.len() as u16 + 4).min(area.height);
        let Some(dialog) = DialogRenderer::center(area, 56, height) else {
            return;
        };

        let bg = Style::default().bg(self.theme.dialog_bg);
        let border = Style::default().fg(self.theme.dialog_border).bg(self.theme.dialog_bg);
        let title = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_title)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_text);
        let selected_style = Style::default()
            .bg(self.theme.list_selected_bg)
            .fg(self.theme.list_selected_fg);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        DialogRenderer::draw_title(dialog, buf, &format!(" {} ", self.title), title);

        let inner_width = dialog.width.saturating_sub(4) as usize;
        let visible = dialog.height.saturating_sub(4) as usize;
        for (row, item) in self.items.iter().take(visible).enumerate() {
            let style = if row == self.selected { selected_style } else { text };
            let y = dialog.y + 1 + row as u16;
            for x in dialog.x + 2..dialog.x + dialog.width - 2 {
                buf[(x, y)].set_char(' ').set_style(style);
            }
            let item: String = item.chars().take(inner_width).collect();
            buf.set_string(dialog.x + 2, y, &item, style);
        }

        buf.set_string(
            dialog.x + 2,
            dialog.y + dialog.height - 2,
            "j/k: move   Enter: select   Esc: cancel",
            text,
        );
    }
}

/// Letter menu shown before launching the fuzzy picker
pub struct FuzzyMenuDialog<'a> {
    scope: FuzzyScope,
    theme: &'a Theme,
}

impl<'a> FuzzyMenuDialog<'a> {
    pub fn new(scope: FuzzyScope, theme: &'a Theme) -> Self {
        Self { scope, theme }
    }
}

impl Widget for FuzzyMenuDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog) = DialogRenderer::center(area, 44, 8) else {
            return;
        };

        let bg = Style::default().bg(self.theme.dialog_bg);
        let border = Style::default().fg(self.theme.dialog_border).bg(self.theme.dialog_bg);
        let title_style = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_title)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.dialog_bg).fg(self.theme.dialog_text);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        let title = match self.scope {
            FuzzyScope::Siblings => " Fuzzy: siblings ",
            FuzzyScope::CwdTree => " Fuzzy: current tree ",
        };
        DialogRenderer::draw_title(dialog, buf, title, title_style);

        let lines = [
            "e  edit the picked file",
            "y  copy its path to the clipboard",
            "o  open it with the OS",
            "c  change directory to it",
            "",
            "Esc: cancel",
        ];
        for (row, line) in lines.iter().enumerate() {
            buf.set_string(dialog.x + 2, dialog.y + 1 + row as u16, line, text);
        }
    }
}

/// Non-fatal error overlay; any key dismisses it
pub struct ErrorDialog<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog) = DialogRenderer::center(area, 60, 6) else {
            return;
        };

        let bg = Style::default().bg(self.theme.danger_bg);
        let border = Style::default().fg(self.theme.danger_border).bg(self.theme.danger_bg);
        let title = Style::default()
            .bg(self.theme.danger_bg)
            .fg(self.theme.dialog_title)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.danger_bg).fg(self.theme.dialog_title);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        DialogRenderer::draw_title(dialog, buf, " Error ", title);

        let inner_width = dialog.width.saturating_sub(4) as usize;
        let chars: Vec<char> = self.message.chars().collect();
        for (row, chunk) in chars.chunks(inner_width.max(1)).take(3).enumerate() {
            let line: String = chunk.iter().collect();
            buf.set_string(dialog.x + 2, dialog.y + 1 + row as u16, &line, text);
        }

        buf.set_string(dialog.x + 2, dialog.y + 4, "Press any key", text);
    }
}
