mod draft_isolation;
mod keyboard;
mod panel;
mod settings_form;
