//! Arrow tab that opens and closes the settings panel
//!
//! Renders as a narrow vertical tab with `▶` while the panel is closed and
//! `◀` while it is open.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{rect_contains, FocusState};

/// Width of the tab in columns
pub const ARROW_BUTTON_WIDTH: u16 = 3;

/// State for the arrow tab
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowButtonState {
    /// Whether the panel it controls is open
    pub is_open: bool,
    pub focus: FocusState,
    pub pressed: bool,
}

impl ArrowButtonState {
    pub fn new(is_open: bool) -> Self {
        Self {
            is_open,
            ..Self::default()
        }
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_open {
            "◀"
        } else {
            "▶"
        }
    }
}

/// Events that can be returned from arrow tab input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowButtonEvent {
    Clicked,
    Hovered,
    Left,
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowButtonLayout {
    pub button_area: Rect,
}

impl ArrowButtonLayout {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.button_area, x, y)
    }
}

/// Render the tab vertically centred in `area`
pub fn render_arrow_button(
    frame: &mut Frame,
    area: Rect,
    state: &ArrowButtonState,
    accent: Color,
) -> ArrowButtonLayout {
    if area.width < ARROW_BUTTON_WIDTH || area.height == 0 {
        return ArrowButtonLayout::default();
    }

    let height = area.height.min(3);
    let y = area.y + (area.height - height) / 2;
    let button_area = Rect::new(area.x, y, ARROW_BUTTON_WIDTH, height);

    let bg = match state.focus {
        FocusState::Hovered | FocusState::Focused => Color::LightCyan,
        FocusState::Disabled => Color::DarkGray,
        FocusState::Normal if state.pressed => Color::LightCyan,
        FocusState::Normal => accent,
    };
    let style = Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Block::default().style(style), button_area);
    let glyph_row = Rect::new(button_area.x, button_area.y + height / 2, ARROW_BUTTON_WIDTH, 1);
    frame.render_widget(
        Paragraph::new(Line::from(format!(" {} ", state.glyph()))).style(style),
        glyph_row,
    );

    ArrowButtonLayout { button_area }
}

impl ArrowButtonState {
    /// Handle a mouse event; a click needs press and release inside the tab
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        layout: &ArrowButtonLayout,
    ) -> Option<ArrowButtonEvent> {
        if self.focus == FocusState::Disabled {
            return None;
        }
        let inside = layout.contains(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.pressed = true;
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_pressed = self.pressed;
                self.pressed = false;
                (inside && was_pressed).then_some(ArrowButtonEvent::Clicked)
            }
            MouseEventKind::Moved => {
                if inside {
                    if self.focus != FocusState::Focused {
                        self.focus = FocusState::Hovered;
                    }
                    Some(ArrowButtonEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(ArrowButtonEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
