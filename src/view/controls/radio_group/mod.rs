//! Radio group for small option sets
//!
//! Renders as:
//! ```text
//! Font size
//! (•) 18px  ( ) 24px  ( ) 38px
//! ```
//!
//! Like the select, the group is controlled: a click or arrow key reports
//! `RadioGroupEvent::Changed` and the owner stores the new value.

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::RadioGroupEvent;
pub use render::render_radio_group;

use super::{rect_contains, FocusState};
use crate::article::catalog;
use crate::article::{CatalogValue, SettingOption};

/// State for a radio group
#[derive(Debug, Clone)]
pub struct RadioGroupState<T: 'static> {
    /// Group name; the options share it like native radio inputs
    pub name: String,
    /// Title displayed above the options
    pub title: String,
    pub options: &'static [SettingOption<T>],
    pub selected: SettingOption<T>,
    pub focus: FocusState,
}

impl<T: CatalogValue> RadioGroupState<T> {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        options: &'static [SettingOption<T>],
        selected: SettingOption<T>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            options,
            selected,
            focus: FocusState::Normal,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Mirror the owner's value
    pub fn set_selected(&mut self, option: SettingOption<T>) {
        self.selected = option;
    }

    pub fn selected_index(&self) -> Option<usize> {
        catalog::position(self.options, &self.selected)
    }

    /// Select the option at `index`
    ///
    /// Returns the option only when the selection actually changed.
    pub fn select(&mut self, index: usize) -> Option<SettingOption<T>> {
        if !self.is_enabled() {
            return None;
        }
        let option = *self.options.get(index)?;
        if option == self.selected {
            return None;
        }
        self.selected = option;
        Some(option)
    }

    /// Step the selection by `delta`, clamped to the ends
    pub fn step(&mut self, delta: isize) -> Option<SettingOption<T>> {
        if self.options.is_empty() {
            return None;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let last = self.options.len() as isize - 1;
        let target = (current + delta).clamp(0, last);
        self.select(target as usize)
    }
}

/// Colors for the radio group
#[derive(Debug, Clone, Copy)]
pub struct RadioGroupColors {
    pub title: Color,
    /// Option label text
    pub label: Color,
    /// The `(•)` marker
    pub marker: Color,
    /// Focused highlight color
    pub focused: Color,
    pub disabled: Color,
}

impl Default for RadioGroupColors {
    fn default() -> Self {
        Self {
            title: Color::Gray,
            label: Color::White,
            marker: Color::Green,
            focused: Color::Cyan,
            disabled: Color::DarkGray,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Default)]
pub struct RadioGroupLayout {
    /// One clickable area per rendered option, marker plus label
    pub option_areas: Vec<Rect>,
    /// Title plus option row
    pub full_area: Rect,
}

impl RadioGroupLayout {
    /// Option index at a point
    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        self.option_areas
            .iter()
            .position(|area| rect_contains(*area, x, y))
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y)
    }
}
