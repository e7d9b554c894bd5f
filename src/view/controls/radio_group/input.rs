//! Radio group input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{FocusState, RadioGroupLayout, RadioGroupState};
use crate::article::{CatalogValue, SettingOption};

/// Events that can be returned from radio group input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioGroupEvent<T> {
    /// A different option was selected
    Changed(SettingOption<T>),
    /// Mouse is hovering the group
    Hovered,
    /// Mouse left the group
    Left,
}

impl<T: CatalogValue> RadioGroupState<T> {
    /// Handle a mouse event for this group
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        layout: &RadioGroupLayout,
    ) -> Option<RadioGroupEvent<T>> {
        if !self.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let index = layout.option_at(x, y)?;
                self.select(index).map(RadioGroupEvent::Changed)
            }
            MouseEventKind::Moved => {
                if layout.contains(x, y) {
                    if self.focus == FocusState::Normal {
                        self.focus = FocusState::Hovered;
                    }
                    Some(RadioGroupEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(RadioGroupEvent::Left)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this group (when focused)
    ///
    /// Left/Right move the selection; there is no separate highlight.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<RadioGroupEvent<T>> {
        if !self.is_enabled() || self.focus != FocusState::Focused {
            return None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.step(-1).map(RadioGroupEvent::Changed),
            KeyCode::Right | KeyCode::Char('l') => self.step(1).map(RadioGroupEvent::Changed),
            _ => None,
        }
    }
}
