//! Select rendering

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use super::{FocusState, SelectColors, SelectLayout, SelectState};
use crate::article::CatalogValue;
use crate::view::controls::fit_width;

/// Render a select control
///
/// The title takes the first row and the `[value ▼]` button the second. When
/// open, the option list is drawn over the rows below, so callers should
/// render an open select after its neighbours.
///
/// # Returns
/// Layout information for hit testing
pub fn render_select<T: CatalogValue>(
    frame: &mut Frame,
    area: Rect,
    state: &SelectState<T>,
    colors: &SelectColors,
) -> SelectLayout {
    if area.height < 2 || area.width < 8 {
        return SelectLayout::default();
    }

    let title_style = match state.focus {
        FocusState::Disabled => Style::default().fg(colors.disabled),
        _ => Style::default().fg(colors.title),
    };
    let title_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(state.title.as_str(), title_style))),
        title_area,
    );

    let (value_style, border_style) = match state.focus {
        FocusState::Normal => {
            let fg = if state.selected.is_some() {
                colors.value
            } else {
                colors.placeholder
            };
            (Style::default().fg(fg), Style::default().fg(colors.border))
        }
        FocusState::Focused | FocusState::Hovered => {
            let style = Style::default().fg(colors.focused_fg).bg(colors.focused);
            (style, style)
        }
        FocusState::Disabled => {
            let style = Style::default().fg(colors.disabled);
            (style, style)
        }
    };

    // "[" + text + " " + arrow + "]"
    let button_width = area.width;
    let text_width = button_width.saturating_sub(4) as usize;
    let text = fit_width(state.display_text(), text_width);
    let arrow = if state.open { "▲" } else { "▼" };

    let button_area = Rect::new(area.x, area.y + 1, button_width, 1);
    let line = Line::from(vec![
        Span::styled("[", border_style),
        Span::styled(text, value_style),
        Span::styled(" ", value_style),
        Span::styled(arrow, border_style),
        Span::styled("]", border_style),
    ]);
    frame.render_widget(Paragraph::new(line), button_area);

    let mut option_areas = Vec::new();
    let mut scroll_offset = 0;

    if state.open && area.height > 2 {
        let menu_y = area.y + 2;
        let available = (area.height - 2) as usize;
        let to_show = state.options.len().min(available);
        scroll_offset = state
            .scroll_offset
            .min(state.options.len().saturating_sub(to_show));
        let option_width = button_width.saturating_sub(1);

        for (i, option) in state
            .options
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(to_show)
        {
            let row = menu_y + (i - scroll_offset) as u16;
            let option_area = Rect::new(area.x + 1, row, option_width, 1);
            option_areas.push(option_area);

            let (fg, bg) = if i == state.highlighted {
                (colors.value, colors.highlight_bg)
            } else if state.hover_index == Some(i) {
                (colors.option, colors.hover_bg)
            } else {
                (colors.option, Color::Reset)
            };
            let mut style = Style::default().fg(fg).bg(bg);
            if Some(i) == state.selected_index() {
                style = style.add_modifier(Modifier::BOLD);
            }

            let label = fit_width(option.title, option_width.saturating_sub(2) as usize);
            frame.render_widget(Clear, option_area);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" ", style),
                    Span::styled(label, style),
                    Span::styled(" ", style),
                ])),
                option_area,
            );
        }
    }

    SelectLayout {
        button_area,
        option_areas,
        full_area: Rect::new(area.x, area.y, area.width, 2),
        scroll_offset,
    }
}
