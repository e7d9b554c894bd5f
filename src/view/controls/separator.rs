//! Horizontal rule between form sections

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Draw a full-width rule on the first row of `area`
pub fn render_separator(frame: &mut Frame, area: Rect, color: Color) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let rule = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(rule).style(Style::default().fg(color)),
        Rect::new(area.x, area.y, area.width, 1),
    );
}
