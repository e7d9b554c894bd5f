//! Hit testing for the parameters form

use ratatui::layout::Rect;

use super::state::FocusField;
use crate::view::controls::{rect_contains, ButtonLayout, RadioGroupLayout, SelectLayout};

/// Where the form's controls were drawn on the last render
#[derive(Debug, Clone, Default)]
pub struct SettingsLayout {
    /// Whole form area
    pub area: Rect,
    pub font_family: SelectLayout,
    pub font_size: RadioGroupLayout,
    pub font_color: SelectLayout,
    pub background_color: SelectLayout,
    pub content_width: SelectLayout,
    pub reset_button: ButtonLayout,
    pub apply_button: ButtonLayout,
}

/// Result of hit testing a point against the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsHit {
    /// An option row of the open select
    SelectOption(FocusField, usize),
    /// The closed part of a field (title, button or radio row)
    Field(FocusField),
    /// Inside the form but not on a control
    Background,
}

impl SettingsLayout {
    fn select_layout(&self, field: FocusField) -> Option<&SelectLayout> {
        match field {
            FocusField::FontFamily => Some(&self.font_family),
            FocusField::FontColor => Some(&self.font_color),
            FocusField::BackgroundColor => Some(&self.background_color),
            FocusField::ContentWidth => Some(&self.content_width),
            _ => None,
        }
    }

    /// Hit test a point; `None` when it is outside the form
    ///
    /// Option rows of an open list are checked first since they are drawn
    /// over the fields below it.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<SettingsHit> {
        for field in FocusField::ALL {
            if let Some(index) = self
                .select_layout(field)
                .and_then(|layout| layout.option_at(x, y))
            {
                return Some(SettingsHit::SelectOption(field, index));
            }
        }

        if !rect_contains(self.area, x, y) {
            return None;
        }

        let field = FocusField::ALL.into_iter().find(|field| match field {
            FocusField::FontSize => self.font_size.contains(x, y),
            FocusField::Reset => self.reset_button.contains(x, y),
            FocusField::Apply => self.apply_button.contains(x, y),
            select => self
                .select_layout(*select)
                .is_some_and(|layout| layout.contains(x, y)),
        });

        Some(field.map_or(SettingsHit::Background, SettingsHit::Field))
    }
}
