//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::dialog_helpers::DialogRenderer;
use super::Theme;

const HELP_LINES: &[&str] = &[
    "j/k  move      J/K  move by 4    h  parent    l  enter dir",
    "Enter  expand/collapse            Backspace  collapse all",
    "Space  mark entry                 ?  this help",
    "",
    "r  rename    m  move    d  delete    n  new file    N  new dir",
    "y  copy    x  cut    p  paste    u  undo",
    "",
    "e  edit      o  open with OS     R  run      Y  path to clipboard",
    "f/F  fuzzy pick (siblings / tree)",
    "c  cd into selection and quit     C  drives    g  history",
    "",
    "q  quit to last dir    Ctrl-C  quit",
];

/// Keymap overlay; Return or Escape dismisses it
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = HELP_LINES.len() as u16 + 3;
        let Some(dialog) = DialogRenderer::center(area, 70, height) else {
            return;
        };

        let bg = Style::default().bg(self.theme.help_bg);
        let border = Style::default().fg(self.theme.help_highlight).bg(self.theme.help_bg);
        let title = Style::default()
            .bg(self.theme.help_bg)
            .fg(self.theme.help_highlight)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().bg(self.theme.help_bg).fg(self.theme.help_fg);

        DialogRenderer::fill_background(dialog, buf, bg);
        DialogRenderer::draw_border(dialog, buf, border);
        DialogRenderer::draw_title(dialog, buf, " Keys ", title);

        let inner_width = dialog.width.saturating_sub(4) as usize;
        for (row, line) in HELP_LINES.iter().enumerate() {
            let line: String = line.chars().take(inner_width).collect();
            buf.set_string(dialog.x + 2, dialog.y + 1 + row as u16, &line, text);
        }
    }
}
