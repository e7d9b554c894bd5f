//! Presentational controls for the settings form
//!
//! Each control follows the same shape:
//! - a state struct holding the props (`options`, `selected`, `title`, ...)
//! - a `render_*` function returning a layout for hit testing
//! - `handle_mouse` / `handle_key` returning an event instead of invoking a
//!   callback; the caller reacts to the event (the `onChange` / `onClick`
//!   of the control)

pub mod arrow_button;
pub mod button;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

pub use arrow_button::{
    render_arrow_button, ArrowButtonEvent, ArrowButtonLayout, ArrowButtonState, ARROW_BUTTON_WIDTH,
};
pub use button::{
    render_button, render_button_row, ButtonColors, ButtonEvent, ButtonKind, ButtonLayout,
    ButtonState, HtmlType,
};
pub use radio_group::{
    render_radio_group, RadioGroupColors, RadioGroupEvent, RadioGroupLayout, RadioGroupState,
};
pub use select::{render_select, SelectColors, SelectEvent, SelectLayout, SelectState};
pub use separator::render_separator;
pub use text::{render_text, TextProps, TextSize, TextWeight};

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
    Hovered,
    Disabled,
}

/// Check if a point is within a rectangle
pub(crate) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Truncate or pad `text` to exactly `width` terminal columns
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    pub fn test_frame<F>(width: u16, height: u16, f: F)
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, height);
                f(frame, area);
            })
            .unwrap();
    }

    /// Render and return the buffer as one string per row
    pub fn render_rows<F>(width: u16, height: u16, f: F) -> Vec<String>
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, height);
                f(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }
}
