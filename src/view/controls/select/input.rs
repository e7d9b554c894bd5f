//! Select input handling

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{FocusState, SelectLayout, SelectState};
use crate::article::{CatalogValue, SettingOption};

/// Events that can be returned from select input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent<T> {
    /// The option list was opened
    Opened,
    /// The list was closed without a new choice
    Closed,
    /// An option was chosen; the owner should store it
    Changed(SettingOption<T>),
    /// The highlight moved inside the open list
    Highlighted(usize),
    /// Mouse is hovering the control
    Hovered,
    /// Mouse left the control
    Left,
}

impl<T: CatalogValue> SelectState<T> {
    /// Handle a mouse event for this select
    ///
    /// # Returns
    /// * `Some(SelectEvent)` if the event was consumed
    /// * `None` if the event was not relevant
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        layout: &SelectLayout,
    ) -> Option<SelectEvent<T>> {
        if !self.is_enabled() {
            return None;
        }

        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.open {
                    if let Some(index) = layout.option_at(x, y) {
                        return self.choose(index).map(SelectEvent::Changed);
                    }
                    // Any other click closes the list without choosing
                    self.cancel();
                    return Some(SelectEvent::Closed);
                }
                if layout.is_button(x, y) {
                    self.open();
                    return Some(SelectEvent::Opened);
                }
                None
            }
            MouseEventKind::Moved => {
                if self.open {
                    let hover = layout.option_at(x, y);
                    if hover != self.hover_index {
                        self.hover_index = hover;
                        return Some(SelectEvent::Hovered);
                    }
                    return None;
                }
                if layout.contains(x, y) {
                    if self.focus == FocusState::Normal {
                        self.focus = FocusState::Hovered;
                    }
                    Some(SelectEvent::Hovered)
                } else if self.focus == FocusState::Hovered {
                    self.focus = FocusState::Normal;
                    Some(SelectEvent::Left)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollUp if self.open => {
                self.scroll_by(-1);
                Some(SelectEvent::Highlighted(self.highlighted))
            }
            MouseEventKind::ScrollDown if self.open => {
                self.scroll_by(1);
                Some(SelectEvent::Highlighted(self.highlighted))
            }
            _ => None,
        }
    }

    /// Handle a keyboard event for this select
    ///
    /// # Returns
    /// * `Some(SelectEvent)` if the event was consumed
    /// * `None` if the event was not relevant
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectEvent<T>> {
        if !self.is_enabled() {
            return None;
        }
        if self.focus != FocusState::Focused && !self.open {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.open {
                    let index = self.highlighted;
                    self.choose(index).map(SelectEvent::Changed)
                } else {
                    self.open();
                    Some(SelectEvent::Opened)
                }
            }
            KeyCode::Esc if self.open => {
                self.cancel();
                Some(SelectEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') if self.open => {
                self.highlight_prev();
                Some(SelectEvent::Highlighted(self.highlighted))
            }
            KeyCode::Down | KeyCode::Char('j') if self.open => {
                self.highlight_next();
                Some(SelectEvent::Highlighted(self.highlighted))
            }
            KeyCode::Down if !self.open => {
                self.open();
                Some(SelectEvent::Opened)
            }
            KeyCode::Home if self.open => {
                self.highlighted = 0;
                self.ensure_visible();
                Some(SelectEvent::Highlighted(0))
            }
            KeyCode::End if self.open && !self.options.is_empty() => {
                self.highlighted = self.options.len() - 1;
                self.ensure_visible();
                Some(SelectEvent::Highlighted(self.highlighted))
            }
            _ => None,
        }
    }
}
