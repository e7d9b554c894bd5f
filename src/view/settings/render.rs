//! Parameters form rendering

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use super::layout::SettingsLayout;
use super::state::{FocusField, SettingsForm};
use crate::view::controls::{
    render_button_row, render_radio_group, render_select, render_separator, render_text,
    ButtonColors, RadioGroupColors, SelectColors, TextProps, TextSize, TextWeight,
};

/// Rows used by the form when every field is closed
pub const FORM_HEIGHT: u16 = 18;

const HEADING: &str = "Set parameters";

// Row offsets from the top of the form
const FONT_FAMILY_ROW: u16 = 2;
const FONT_SIZE_ROW: u16 = 5;
const FONT_COLOR_ROW: u16 = 8;
const SEPARATOR_ROW: u16 = 10;
const BACKGROUND_ROW: u16 = 11;
const CONTENT_WIDTH_ROW: u16 = 14;
const BUTTON_ROW: u16 = 17;

/// Render the form into `area` and store the layout for hit testing
pub fn render_settings(frame: &mut Frame, area: Rect, form: &mut SettingsForm) {
    form.layout = SettingsLayout {
        area,
        ..SettingsLayout::default()
    };
    if area.width < 12 || area.height < 2 {
        return;
    }

    let select_colors = SelectColors::default();
    let bottom = area.y + area.height;
    let row = |offset: u16, height: u16| -> Rect {
        let y = area.y + offset;
        Rect::new(area.x, y, area.width, height.min(bottom.saturating_sub(y)))
    };

    render_text(
        frame,
        row(0, 1),
        &TextProps::new(HEADING)
            .size(TextSize::Large)
            .weight(TextWeight::Bold)
            .uppercase(true)
            .color(Color::White),
    );

    form.layout.font_family = render_select(
        frame,
        row(FONT_FAMILY_ROW, 2),
        &form.font_family,
        &select_colors,
    );
    form.layout.font_size = render_radio_group(
        frame,
        row(FONT_SIZE_ROW, 2),
        &form.font_size,
        &RadioGroupColors::default(),
    );
    form.layout.font_color = render_select(
        frame,
        row(FONT_COLOR_ROW, 2),
        &form.font_color,
        &select_colors,
    );
    render_separator(frame, row(SEPARATOR_ROW, 1), Color::DarkGray);
    form.layout.background_color = render_select(
        frame,
        row(BACKGROUND_ROW, 2),
        &form.background_color,
        &select_colors,
    );
    form.layout.content_width = render_select(
        frame,
        row(CONTENT_WIDTH_ROW, 2),
        &form.content_width,
        &select_colors,
    );

    let reset_colors = ButtonColors::for_kind(form.reset_button.kind);
    let apply_colors = ButtonColors::for_kind(form.apply_button.kind);
    let buttons = render_button_row(
        frame,
        row(BUTTON_ROW, 1),
        &[
            (&form.reset_button, &reset_colors),
            (&form.apply_button, &apply_colors),
        ],
        2,
    );
    let mut buttons = buttons.into_iter();
    form.layout.reset_button = buttons.next().unwrap_or_default();
    form.layout.apply_button = buttons.next().unwrap_or_default();

    // The open list is drawn last so it covers the fields below it
    let Some(open) = form.open_select() else {
        return;
    };
    let offset = match open {
        FocusField::FontFamily => FONT_FAMILY_ROW,
        FocusField::FontColor => FONT_COLOR_ROW,
        FocusField::BackgroundColor => BACKGROUND_ROW,
        _ => CONTENT_WIDTH_ROW,
    };
    let list_area = row(offset, bottom.saturating_sub(area.y + offset));
    let visible = list_area.height.saturating_sub(2).max(1) as usize;

    match open {
        FocusField::FontFamily => {
            form.font_family.max_visible = visible;
            form.font_family.ensure_visible();
            form.layout.font_family =
                render_select(frame, list_area, &form.font_family, &select_colors);
        }
        FocusField::FontColor => {
            form.font_color.max_visible = visible;
            form.font_color.ensure_visible();
            form.layout.font_color =
                render_select(frame, list_area, &form.font_color, &select_colors);
        }
        FocusField::BackgroundColor => {
            form.background_color.max_visible = visible;
            form.background_color.ensure_visible();
            form.layout.background_color =
                render_select(frame, list_area, &form.background_color, &select_colors);
        }
        _ => {
            form.content_width.max_visible = visible;
            form.content_width.ensure_visible();
            form.layout.content_width =
                render_select(frame, list_area, &form.content_width, &select_colors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::{DEFAULT_ARTICLE_STATE, FONT_COLORS};
    use crate::view::controls::test_support::render_rows;

    fn rows_for(form: &mut SettingsForm, height: u16) -> Vec<String> {
        render_rows(34, height, |frame, area| render_settings(frame, area, form))
    }

    #[test]
    fn test_form_sections_in_order() {
        let mut form = SettingsForm::new(DEFAULT_ARTICLE_STATE);
        let rows = rows_for(&mut form, FORM_HEIGHT);

        assert!(rows[0].starts_with("SET PARAMETERS"));
        assert!(rows[2].starts_with("Font"));
        assert!(rows[3].contains("Open Sans"));
        assert!(rows[5].starts_with("Font size"));
        assert!(rows[6].contains("(•) 18px"));
        assert!(rows[8].starts_with("Font color"));
        assert!(rows[9].contains("Black"));
        assert!(rows[10].starts_with("───"));
        assert!(rows[11].starts_with("Background color"));
        assert!(rows[12].contains("White"));
        assert!(rows[14].starts_with("Content width"));
        assert!(rows[15].contains("Wide"));
        assert!(rows[17].starts_with("[ Reset ]  [ Apply ]"));
    }

    #[test]
    fn test_open_select_covers_fields_below() {
        let mut form = SettingsForm::new(DEFAULT_ARTICLE_STATE);
        form.font_color.open();
        let rows = rows_for(&mut form, 24);

        // Options start right under the font color button
        assert!(rows[10].contains("Black"));
        assert!(rows[11].contains("White"));
        assert_eq!(form.layout.font_color.option_areas.len(), FONT_COLORS.len());
    }

    #[test]
    fn test_short_area_limits_visible_options() {
        let mut form = SettingsForm::new(DEFAULT_ARTICLE_STATE);
        form.font_color.open();
        rows_for(&mut form, FORM_HEIGHT);

        assert_eq!(form.font_color.max_visible, 8);
        assert_eq!(form.layout.font_color.option_areas.len(), 8);
    }

    #[test]
    fn test_wheel_scroll_survives_render() {
        use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

        let mut form = SettingsForm::new(DEFAULT_ARTICLE_STATE);
        form.font_color.open();
        rows_for(&mut form, 14);
        assert_eq!(form.font_color.max_visible, 4);
        assert_eq!(form.font_color.scroll_offset, 0);

        let scroll_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 5,
            row: 10,
            modifiers: KeyModifiers::empty(),
        };
        form.handle_mouse(scroll_down);
        assert_eq!(form.font_color.scroll_offset, 1);

        let rows = rows_for(&mut form, 14);
        assert_eq!(form.font_color.scroll_offset, 1);
        assert_eq!(form.layout.font_color.scroll_offset, 1);
        // "Black" scrolled off the top; "White" now heads the list
        assert!(rows[10].contains("White"));
        assert!(form.font_color.open);
    }

    #[test]
    fn test_layout_records_buttons() {
        let mut form = SettingsForm::new(DEFAULT_ARTICLE_STATE);
        rows_for(&mut form, FORM_HEIGHT);
        assert_eq!(form.layout.reset_button.button_area.y, BUTTON_ROW);
        assert!(form.layout.apply_button.button_area.x > form.layout.reset_button.button_area.x);
    }
}
