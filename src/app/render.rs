//! Screen composition: article, settings panel and arrow tab

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::ReaderApp;
use crate::view::article::render_article;
use crate::view::controls::{render_arrow_button, ARROW_BUTTON_WIDTH};
use crate::view::settings::render_settings;

const PANEL_BG: Color = Color::Rgb(0x20, 0x22, 0x28);
const ACCENT: Color = Color::Cyan;
const HINTS: &str = "Tab move · Enter pick · Esc close";

impl ReaderApp {
    /// Draw the whole screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width <= ARROW_BUTTON_WIDTH || area.height == 0 {
            return;
        }

        // The article keeps its place whether or not the panel is open
        let article_area = Rect::new(
            area.x + ARROW_BUTTON_WIDTH,
            area.y,
            area.width - ARROW_BUTTON_WIDTH,
            area.height,
        );
        render_article(frame, article_area, &self.article, &self.style);

        if !self.panel.is_open() {
            self.panel.panel_ref().clear();
            let tab_area = Rect::new(area.x, area.y, ARROW_BUTTON_WIDTH, area.height);
            frame.render_widget(Clear, tab_area);
            self.arrow_layout = render_arrow_button(frame, tab_area, &self.arrow, ACCENT);
            return;
        }

        let panel_width = self
            .config
            .panel_width
            .min(area.width - ARROW_BUTTON_WIDTH);
        let panel_area = Rect::new(area.x, area.y, panel_width, area.height);
        self.render_panel(frame, panel_area);

        let tab_area = Rect::new(panel_area.right(), area.y, ARROW_BUTTON_WIDTH, area.height);
        self.arrow_layout = render_arrow_button(frame, tab_area, &self.arrow, ACCENT);

        // Presses on the tab count as inside the panel
        self.panel
            .panel_ref()
            .set(Rect::new(area.x, area.y, panel_width + ARROW_BUTTON_WIDTH, area.height));
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(ACCENT))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // One column of padding on each side, one row on top
        let mut form_area = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );

        if self.config.show_hints && form_area.height > 1 {
            form_area.height -= 1;
            let hint_row = Rect::new(form_area.x, form_area.bottom(), form_area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    HINTS,
                    Style::default().fg(Color::DarkGray),
                ))),
                hint_row,
            );
        }

        render_settings(frame, form_area, &mut self.form);
    }
}
