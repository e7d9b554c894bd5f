//! Radio group rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{FocusState, RadioGroupColors, RadioGroupLayout, RadioGroupState};
use crate::article::CatalogValue;

const OPTION_GAP: u16 = 2;

/// Render a radio group: the title on the first row, options side by side on
/// the second. Options that do not fit are not drawn and get no hit area.
///
/// # Returns
/// Layout information for hit testing
pub fn render_radio_group<T: CatalogValue>(
    frame: &mut Frame,
    area: Rect,
    state: &RadioGroupState<T>,
    colors: &RadioGroupColors,
) -> RadioGroupLayout {
    if area.height < 2 || area.width < 4 {
        return RadioGroupLayout::default();
    }

    let (title_color, label_color, marker_color) = match state.focus {
        FocusState::Normal => (colors.title, colors.label, colors.marker),
        FocusState::Focused | FocusState::Hovered => {
            (colors.focused, colors.focused, colors.focused)
        }
        FocusState::Disabled => (colors.disabled, colors.disabled, colors.disabled),
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            state.title.as_str(),
            Style::default().fg(title_color),
        ))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let row = area.y + 1;
    let right = area.x + area.width;
    let mut x = area.x;
    let mut spans = Vec::new();
    let mut option_areas = Vec::with_capacity(state.options.len());

    for option in state.options {
        let checked = *option == state.selected;
        // "(•) " + label
        let width = 4 + option.title.width() as u16;
        if x + width > right {
            break;
        }

        let marker = if checked { "(•)" } else { "( )" };
        let mut label_style = Style::default().fg(label_color);
        if checked {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" ".repeat(OPTION_GAP as usize)));
        }
        spans.push(Span::styled(marker, Style::default().fg(marker_color)));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(option.title, label_style));

        option_areas.push(Rect::new(x, row, width, 1));
        x += width + OPTION_GAP;
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(area.x, row, area.width, 1),
    );

    RadioGroupLayout {
        option_areas,
        full_area: Rect::new(area.x, area.y, area.width, 2),
    }
}
