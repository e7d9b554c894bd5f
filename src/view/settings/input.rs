//! Keyboard and mouse handling for the parameters form
//!
//! Every control change is written straight into the draft. Only the two
//! buttons produce a `FormCommand` for the host.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::layout::{SettingsHit, SettingsLayout};
use super::state::{FocusField, FormCommand, SettingsForm};
use crate::article::SettingOption;
use crate::view::controls::{ButtonEvent, HtmlType, RadioGroupEvent, SelectEvent};

fn changed<T>(event: Option<SelectEvent<T>>) -> Option<SettingOption<T>> {
    match event? {
        SelectEvent::Changed(option) => Some(option),
        _ => None,
    }
}

fn clicked(event: Option<ButtonEvent>) -> Option<HtmlType> {
    match event? {
        ButtonEvent::Clicked(html_type) => Some(html_type),
        _ => None,
    }
}

impl SettingsForm {
    /// Handle a key while the panel is open
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormCommand> {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                None
            }
            _ => {
                let field = self.open_select().unwrap_or(self.focus);
                self.field_key(field, key)
            }
        }
    }

    fn field_key(&mut self, field: FocusField, key: KeyEvent) -> Option<FormCommand> {
        match field {
            FocusField::FontFamily => {
                if let Some(option) = changed(self.font_family.handle_key(key)) {
                    self.draft_mut().set_font_family(option);
                }
            }
            FocusField::FontSize => {
                if let Some(RadioGroupEvent::Changed(option)) = self.font_size.handle_key(key) {
                    self.draft_mut().set_font_size(option);
                }
            }
            FocusField::FontColor => {
                if let Some(option) = changed(self.font_color.handle_key(key)) {
                    self.draft_mut().set_font_color(option);
                }
            }
            FocusField::BackgroundColor => {
                if let Some(option) = changed(self.background_color.handle_key(key)) {
                    self.draft_mut().set_background_color(option);
                }
            }
            FocusField::ContentWidth => {
                if let Some(option) = changed(self.content_width.handle_key(key)) {
                    self.draft_mut().set_content_width(option);
                }
            }
            FocusField::Reset => {
                let html_type = clicked(self.reset_button.handle_key(key))?;
                return self.activate(html_type);
            }
            FocusField::Apply => {
                let html_type = clicked(self.apply_button.handle_key(key))?;
                return self.activate(html_type);
            }
        }
        None
    }

    /// Handle a mouse event using the layout from the last render
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<FormCommand> {
        let layout = self.layout.clone();

        // An open list takes every pointer event until it closes
        if let Some(field) = self.open_select() {
            self.select_mouse(field, event, &layout);
            return None;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(SettingsHit::Field(field)) = layout.hit_test(event.column, event.row) {
                    self.set_focus(field);
                    return self.field_mouse(field, event, &layout);
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let reset = clicked(self.reset_button.handle_mouse(event, &layout.reset_button));
                let apply = clicked(self.apply_button.handle_mouse(event, &layout.apply_button));
                reset.or(apply).and_then(|html_type| self.activate(html_type))
            }
            MouseEventKind::Moved => {
                self.font_family.handle_mouse(event, &layout.font_family);
                self.font_size.handle_mouse(event, &layout.font_size);
                self.font_color.handle_mouse(event, &layout.font_color);
                self.background_color.handle_mouse(event, &layout.background_color);
                self.content_width.handle_mouse(event, &layout.content_width);
                self.reset_button.handle_mouse(event, &layout.reset_button);
                self.apply_button.handle_mouse(event, &layout.apply_button);
                None
            }
            _ => None,
        }
    }

    fn field_mouse(
        &mut self,
        field: FocusField,
        event: MouseEvent,
        layout: &SettingsLayout,
    ) -> Option<FormCommand> {
        match field {
            FocusField::FontSize => {
                if let Some(RadioGroupEvent::Changed(option)) =
                    self.font_size.handle_mouse(event, &layout.font_size)
                {
                    self.draft_mut().set_font_size(option);
                }
            }
            // Buttons arm on press and fire on release
            FocusField::Reset => {
                self.reset_button.handle_mouse(event, &layout.reset_button);
            }
            FocusField::Apply => {
                self.apply_button.handle_mouse(event, &layout.apply_button);
            }
            select => self.select_mouse(select, event, layout),
        }
        None
    }

    fn select_mouse(&mut self, field: FocusField, event: MouseEvent, layout: &SettingsLayout) {
        match field {
            FocusField::FontFamily => {
                let event = self.font_family.handle_mouse(event, &layout.font_family);
                if let Some(option) = changed(event) {
                    self.draft_mut().set_font_family(option);
                }
            }
            FocusField::FontColor => {
                let event = self.font_color.handle_mouse(event, &layout.font_color);
                if let Some(option) = changed(event) {
                    self.draft_mut().set_font_color(option);
                }
            }
            FocusField::BackgroundColor => {
                if let Some(option) =
                    changed(self.background_color.handle_mouse(event, &layout.background_color))
                {
                    self.draft_mut().set_background_color(option);
                }
            }
            FocusField::ContentWidth => {
                if let Some(option) =
                    changed(self.content_width.handle_mouse(event, &layout.content_width))
                {
                    self.draft_mut().set_content_width(option);
                }
            }
            FocusField::FontSize | FocusField::Reset | FocusField::Apply => {}
        }
    }

    fn activate(&mut self, html_type: HtmlType) -> Option<FormCommand> {
        match html_type {
            HtmlType::Submit => Some(self.submit()),
            HtmlType::Reset => Some(self.reset()),
            HtmlType::Button => None,
        }
    }
}
