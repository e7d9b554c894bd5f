//! Form button
//!
//! Renders as: `[ Apply ]`
//!
//! `html_type` says what activating the button does to the form (submit it
//! or reset it); `kind` only picks the look.

mod input;
mod render;

use ratatui::layout::Rect;
use ratatui::style::Color;

pub use input::ButtonEvent;
pub use render::{render_button, render_button_row};

use super::{rect_contains, FocusState};

/// What activating the button does to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlType {
    /// Commit the form
    Submit,
    /// Restore the form's defaults without submitting
    Reset,
    /// No form action
    Button,
}

/// Visual variant of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    /// Accent button for the primary action
    Apply,
    /// Plain button for secondary actions
    #[default]
    Clear,
}

/// State for a button control
#[derive(Debug, Clone)]
pub struct ButtonState {
    /// Button label text
    pub title: String,
    pub html_type: HtmlType,
    pub kind: ButtonKind,
    /// Focus state
    pub focus: FocusState,
    /// Whether the button is currently pressed (for visual feedback)
    pub pressed: bool,
}

impl ButtonState {
    /// Create a new button state
    pub fn new(title: impl Into<String>, html_type: HtmlType, kind: ButtonKind) -> Self {
        Self {
            title: title.into(),
            html_type,
            kind,
            focus: FocusState::Normal,
            pressed: false,
        }
    }

    /// Set the focus state
    pub fn with_focus(mut self, focus: FocusState) -> Self {
        self.focus = focus;
        self
    }

    /// Check if the button can be activated
    pub fn is_enabled(&self) -> bool {
        self.focus != FocusState::Disabled
    }

    /// Set pressed state (for visual feedback)
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// Colors for the button control
#[derive(Debug, Clone, Copy)]
pub struct ButtonColors {
    /// Button text color
    pub text: Color,
    /// Border color
    pub border: Color,
    /// Background color (when pressed)
    pub pressed_bg: Color,
    /// Focused highlight color
    pub focused: Color,
    /// Hovered highlight color
    pub hovered: Color,
    /// Disabled color
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            text: Color::White,
            border: Color::Gray,
            pressed_bg: Color::DarkGray,
            focused: Color::Cyan,
            hovered: Color::Blue,
            disabled: Color::DarkGray,
        }
    }
}

impl ButtonColors {
    /// Accent colors for the Apply button
    pub fn primary() -> Self {
        Self {
            text: Color::LightCyan,
            border: Color::Cyan,
            pressed_bg: Color::Cyan,
            focused: Color::LightCyan,
            hovered: Color::LightCyan,
            disabled: Color::DarkGray,
        }
    }

    /// Colors matching a button's kind
    pub fn for_kind(kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::Apply => Self::primary(),
            ButtonKind::Clear => Self::default(),
        }
    }
}

/// Layout information returned after rendering for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonLayout {
    /// The clickable button area
    pub button_area: Rect,
}

impl ButtonLayout {
    /// Check if a point is within the button
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.button_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::controls::test_support::{render_rows, test_frame};

    fn apply() -> ButtonState {
        ButtonState::new("Apply", HtmlType::Submit, ButtonKind::Apply)
    }

    #[test]
    fn test_button_renders() {
        let rows = render_rows(20, 1, |frame, area| {
            let layout = render_button(frame, area, &apply(), &ButtonColors::primary());
            assert_eq!(layout.button_area.width, 9); // "[ Apply ]"
        });
        assert!(rows[0].starts_with("[ Apply ]"));
    }

    #[test]
    fn test_button_hit_detection() {
        test_frame(20, 1, |frame, area| {
            let layout = render_button(frame, area, &apply(), &ButtonColors::default());

            assert!(layout.contains(0, 0));
            assert!(layout.contains(8, 0));
            assert!(!layout.contains(9, 0));
        });
    }

    #[test]
    fn test_button_row() {
        test_frame(40, 1, |frame, area| {
            let reset = ButtonState::new("Reset", HtmlType::Reset, ButtonKind::Clear);
            let apply = apply();
            let plain = ButtonColors::default();
            let primary = ButtonColors::primary();

            let layouts =
                render_button_row(frame, area, &[(&reset, &plain), (&apply, &primary)], 2);

            assert_eq!(layouts.len(), 2);
            assert_eq!(layouts[1].button_area.x, layouts[0].button_area.width + 2);
        });
    }

    #[test]
    fn test_button_truncation() {
        test_frame(6, 1, |frame, area| {
            let state =
                ButtonState::new("Very Long Button Text", HtmlType::Button, ButtonKind::Clear);
            let layout = render_button(frame, area, &state, &ButtonColors::default());
            assert!(layout.button_area.width <= area.width);
        });
    }

    #[test]
    fn test_kind_picks_colors() {
        assert_eq!(ButtonColors::for_kind(ButtonKind::Apply).border, Color::Cyan);
        assert_eq!(ButtonColors::for_kind(ButtonKind::Clear).border, Color::Gray);
    }

    #[test]
    fn test_button_disabled() {
        let state = apply().with_focus(FocusState::Disabled);
        assert!(!state.is_enabled());
    }
}
