//! "Set parameters" form shown inside the settings panel
//!
//! - `state`: the draft plus one control per configuration slot
//! - `input`: keyboard and mouse routing into the controls
//! - `layout`: hit testing against the last render
//! - `render`: drawing the form

mod input;
mod layout;
mod render;
mod state;

pub use layout::{SettingsHit, SettingsLayout};
pub use render::{render_settings, FORM_HEIGHT};
pub use state::{FocusField, FormCommand, SettingsForm};
