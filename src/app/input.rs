//! Key and mouse routing for the reader

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::ReaderApp;
use crate::view::controls::ArrowButtonEvent;
use crate::view::panel::PointerDown;

impl ReaderApp {
    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                return;
            }
            KeyCode::F(2) => {
                self.toggle_panel();
                return;
            }
            KeyCode::Char(',') if ctrl => {
                self.toggle_panel();
                return;
            }
            _ => {}
        }

        if !self.panel.is_open() {
            if key.code == KeyCode::Char('q') && !ctrl {
                self.quit();
            }
            return;
        }

        if key.code == KeyCode::Esc && !self.form.has_open_select() {
            self.close_panel();
            return;
        }

        if let Some(command) = self.form.handle_key(key) {
            self.apply_command(command);
        }
    }

    /// Handle a mouse event
    ///
    /// A left press first goes through the document listeners; if that
    /// closes the panel the press goes no further.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind == MouseEventKind::Down(MouseButton::Left) {
            let was_open = self.panel.is_open();
            let pointer = PointerDown::new(event.column, event.row);
            for message in self.listeners.dispatch(&pointer) {
                self.handle_panel_event(message);
            }
            if was_open && !self.panel.is_open() {
                return;
            }
        }

        let arrow_layout = self.arrow_layout;
        if let Some(ArrowButtonEvent::Clicked) = self.arrow.handle_mouse(event, &arrow_layout) {
            self.toggle_panel();
            return;
        }

        if self.panel.is_open() {
            if let Some(command) = self.form.handle_mouse(event) {
                self.apply_command(command);
            }
        }
    }
}
