//! Article presentation settings
//!
//! - `option` / `catalog`: the legal choices for each slot
//! - `configuration`: the five-slot value record
//! - `draft`: uncommitted edits made in the settings panel
//! - `bridge`: the applied configuration and its only two mutators
//! - `style`: projection into style variables and terminal hints
//! - `content`: the article body

pub mod bridge;
pub mod catalog;
pub mod configuration;
pub mod content;
pub mod draft;
pub mod option;
pub mod style;

pub use bridge::AppliedSettings;
pub use configuration::ArticleConfiguration;
pub use content::Article;
pub use draft::DraftSettings;
pub use option::{CatalogValue, ColorValue, ContentWidth, FontFamily, FontSize, SettingOption};
pub use style::{project, ArticleStyle, StyleVariable, StyleVariables};
