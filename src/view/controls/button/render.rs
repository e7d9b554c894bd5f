//! Button rendering functions

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{ButtonColors, ButtonLayout, ButtonState, FocusState};
use crate::view::controls::fit_width;

/// Render a button control
///
/// # Returns
/// Layout information for hit testing
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &ButtonState,
    colors: &ButtonColors,
) -> ButtonLayout {
    if area.height == 0 || area.width < 4 {
        return ButtonLayout::default();
    }

    let (text_color, border_color, bg_color) = match state.focus {
        FocusState::Normal if state.pressed => {
            (colors.text, colors.border, Some(colors.pressed_bg))
        }
        FocusState::Normal => (colors.text, colors.border, None),
        FocusState::Focused if state.pressed => {
            (colors.text, colors.focused, Some(colors.pressed_bg))
        }
        FocusState::Focused => (colors.focused, colors.focused, None),
        FocusState::Hovered => (colors.hovered, colors.hovered, None),
        FocusState::Disabled => (colors.disabled, colors.disabled, None),
    };

    let actual_width = button_width(state).min(area.width);
    let label = fit_width(&state.title, actual_width.saturating_sub(4) as usize);

    let mut style = Style::default().fg(text_color);
    if let Some(bg) = bg_color {
        style = style.bg(bg);
    }
    if state.focus == FocusState::Focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let line = Line::from(vec![
        Span::styled("[", Style::default().fg(border_color)),
        Span::raw(" "),
        Span::styled(label, style),
        Span::raw(" "),
        Span::styled("]", Style::default().fg(border_color)),
    ]);

    let button_area = Rect::new(area.x, area.y, actual_width, 1);
    frame.render_widget(Paragraph::new(line), button_area);

    ButtonLayout { button_area }
}

/// Render a row of buttons left to right with `gap` columns between them
///
/// Buttons that do not fit are skipped.
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    buttons: &[(&ButtonState, &ButtonColors)],
    gap: u16,
) -> Vec<ButtonLayout> {
    if buttons.is_empty() || area.height == 0 {
        return Vec::new();
    }

    let mut layouts = Vec::with_capacity(buttons.len());
    let mut x = area.x;

    for (state, colors) in buttons {
        let width = button_width(state);
        if x + width > area.x + area.width {
            break;
        }

        let layout = render_button(frame, Rect::new(x, area.y, width, 1), state, colors);
        layouts.push(layout);

        x += width + gap;
    }

    layouts
}

/// "[ " + title + " ]"
fn button_width(state: &ButtonState) -> u16 {
    (state.title.width() + 4) as u16
}
