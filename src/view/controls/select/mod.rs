//! Single-choice select over catalog options
//!
//! Renders as:
//! ```text
//! Title
//! [Selected option      ▼]
//! ```
//!
//! The select is controlled: `selected` mirrors whatever the owner holds, and
//! a choice is reported as `SelectEvent::Changed` for the owner to store.
//! While the list is open, keyboard navigation moves a highlight without
//! touching `selected`; Enter commits the highlight and Esc drops it.

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::SelectEvent;
pub use render::render_select;

use super::{rect_contains, FocusState};
use crate::article::catalog;
use crate::article::{CatalogValue, SettingOption};

/// State for a select control
#[derive(Debug, Clone)]
pub struct SelectState<T: 'static> {
    /// Title displayed above the control
    pub title: String,
    /// Text shown when nothing is selected
    pub placeholder: String,
    /// The legal choices
    pub options: &'static [SettingOption<T>],
    /// Currently selected option
    pub selected: Option<SettingOption<T>>,
    /// Whether the option list is open
    pub open: bool,
    /// Focus state
    pub focus: FocusState,
    /// Highlighted option index while open
    pub highlighted: usize,
    /// Scroll offset for long option lists
    pub scroll_offset: usize,
    /// Maximum visible options (updated during render)
    pub max_visible: usize,
    /// Option under the mouse while open
    pub hover_index: Option<usize>,
}

impl<T: CatalogValue> SelectState<T> {
    /// Create a select over `options` with `selected` preselected
    pub fn new(
        title: impl Into<String>,
        options: &'static [SettingOption<T>],
        selected: SettingOption<T>,
    ) -> Self {
        Self {
            title: title.into(),
            placeholder: String::new(),
            options,
            selected: Some(selected),
            open: false,
            focus: FocusState::Normal,
            highlighted: 0,
            scroll_offset: 0,
            max_visible: 5,
            hover_index: None,
        }
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
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
        self.selected = Some(option);
    }

    /// Index of the selected option within `options`
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .as_ref()
            .and_then(|selected| catalog::position(self.options, selected))
    }

    /// Text shown in the closed control
    pub fn display_text(&self) -> &str {
        match &self.selected {
            Some(option) => option.title,
            None => &self.placeholder,
        }
    }

    /// Open the list with the highlight on the current selection
    pub fn open(&mut self) {
        if self.is_enabled() && !self.open {
            self.open = true;
            self.highlighted = self.selected_index().unwrap_or(0);
            self.hover_index = None;
            self.ensure_visible();
        }
    }

    /// Close the list without choosing
    pub fn cancel(&mut self) {
        self.open = false;
        self.hover_index = None;
    }

    /// Choose the option at `index` and close
    ///
    /// Returns the chosen option, or `None` if the index is out of range.
    pub fn choose(&mut self, index: usize) -> Option<SettingOption<T>> {
        if !self.is_enabled() {
            return None;
        }
        let option = *self.options.get(index)?;
        self.selected = Some(option);
        self.open = false;
        self.hover_index = None;
        Some(option)
    }

    /// Move the highlight down, wrapping at the end
    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
            self.ensure_visible();
        }
    }

    /// Move the highlight up, wrapping at the start
    pub fn highlight_prev(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = if self.highlighted == 0 {
                self.options.len() - 1
            } else {
                self.highlighted - 1
            };
            self.ensure_visible();
        }
    }

    /// Keep the highlighted option inside the visible window
    pub fn ensure_visible(&mut self) {
        if self.max_visible == 0 || self.options.len() <= self.max_visible {
            self.scroll_offset = 0;
            return;
        }
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + self.max_visible {
            self.scroll_offset = self.highlighted + 1 - self.max_visible;
        }
    }

    /// Scroll the list by a delta (positive = down)
    pub fn scroll_by(&mut self, delta: i32) {
        if self.options.len() <= self.max_visible {
            return;
        }
        let max_offset = self.options.len() - self.max_visible;
        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_offset);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs() as usize);
        }
        // The highlight rides along so `ensure_visible` keeps the new window
        let last_visible = self.scroll_offset + self.max_visible - 1;
        self.highlighted = self.highlighted.clamp(self.scroll_offset, last_visible);
    }
}

/// Colors for the select control
#[derive(Debug, Clone, Copy)]
pub struct SelectColors {
    /// Title text
    pub title: Color,
    /// Selected value text
    pub value: Color,
    /// Placeholder text
    pub placeholder: Color,
    /// Bracket and arrow color
    pub border: Color,
    /// Option text in the open list
    pub option: Color,
    /// Background of the highlighted option
    pub highlight_bg: Color,
    /// Background of the hovered option
    pub hover_bg: Color,
    /// Focus indicator background
    pub focused: Color,
    /// Text on the focus indicator
    pub focused_fg: Color,
    pub disabled: Color,
}

impl Default for SelectColors {
    fn default() -> Self {
        Self {
            title: Color::Gray,
            value: Color::White,
            placeholder: Color::DarkGray,
            border: Color::Gray,
            option: Color::White,
            highlight_bg: Color::DarkGray,
            hover_bg: Color::Blue,
            focused: Color::Cyan,
            focused_fg: Color::Black,
            disabled: Color::DarkGray,
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Default)]
pub struct SelectLayout {
    /// The clickable `[value ▼]` area
    pub button_area: Rect,
    /// Rows of the open option list (empty when closed)
    pub option_areas: Vec<Rect>,
    /// Title plus button
    pub full_area: Rect,
    /// Scroll offset used during rendering
    pub scroll_offset: usize,
}

impl SelectLayout {
    pub fn is_button(&self, x: u16, y: u16) -> bool {
        rect_contains(self.button_area, x, y)
    }

    /// Option index at a point, accounting for the scroll offset
    pub fn option_at(&self, x: u16, y: u16) -> Option<usize> {
        self.option_areas
            .iter()
            .position(|area| rect_contains(*area, x, y))
            .map(|i| self.scroll_offset + i)
    }

    /// Whether a point hits the control or its open list
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.full_area, x, y) || self.option_at(x, y).is_some()
    }
}
