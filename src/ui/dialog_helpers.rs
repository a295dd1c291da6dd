//! Dialog rendering helper utilities.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};

/// Helper functions shared by the overlay widgets.
pub struct DialogRenderer;

impl DialogRenderer {
    /// Calculate centered dialog position and return the dialog area.
    /// Returns None if the area is too small.
    pub fn center(area: Rect, width: u16, height: u16) -> Option<Rect> {
        if area.width < 20 || area.height < height {
            return None;
        }

        let dialog_width = width.min(area.width.saturating_sub(4));
        let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Some(Rect { x, y, width: dialog_width, height })
    }

    /// Fill dialog area with background color.
    pub fn fill_background(area: Rect, buf: &mut Buffer, style: Style) {
        for row in area.y..area.y + area.height {
            for col in area.x..area.x + area.width {
                buf[(col, row)].set_char(' ').set_style(style);
            }
        }
    }

    /// Draw dialog border using box-drawing characters.
    pub fn draw_border(area: Rect, buf: &mut Buffer, style: Style) {
        buf[(area.x, area.y)].set_char('┌').set_style(style);
        buf[(area.x + area.width - 1, area.y)].set_char('┐').set_style(style);
        for col in area.x + 1..area.x + area.width - 1 {
            buf[(col, area.y)].set_char('─').set_style(style);
        }

        buf[(area.x, area.y + area.height - 1)].set_char('└').set_style(style);
        buf[(area.x + area.width - 1, area.y + area.height - 1)].set_char('┘').set_style(style);
        for col in area.x + 1..area.x + area.width - 1 {
            buf[(col, area.y + area.height - 1)].set_char('─').set_style(style);
        }

        for row in area.y + 1..area.y + area.height - 1 {
            buf[(area.x, row)].set_char('│').set_style(style);
            buf[(area.x + area.width - 1, row)].set_char('│').set_style(style);
        }
    }

    /// Draw centered title on the top border.
    pub fn draw_title(area: Rect, buf: &mut Buffer, title: &str, style: Style) {
        let title_x = area.x + (area.width.saturating_sub(title.len() as u16)) / 2;
        buf.set_string(title_x, area.y, title, style);
    }
}
