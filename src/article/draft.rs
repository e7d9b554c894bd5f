//! Draft settings store
//!
//! Holds the in-progress copy of the configuration while the settings panel
//! is open. Nothing here is visible to the article until the bridge commits
//! it.

use super::configuration::ArticleConfiguration;
use super::option::{ColorValue, ContentWidth, FontFamily, FontSize, SettingOption};

/// Uncommitted copy of the article configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSettings {
    draft: ArticleConfiguration,
}

impl DraftSettings {
    /// Seed a draft from the currently applied configuration
    pub fn new(applied: ArticleConfiguration) -> Self {
        Self { draft: applied }
    }

    /// The configuration being edited
    pub fn current(&self) -> ArticleConfiguration {
        self.draft
    }

    /// Discard any edits and start over from `applied`
    pub fn reseed(&mut self, applied: ArticleConfiguration) {
        if self.draft != applied {
            tracing::debug!("Discarding unsaved draft edits");
        }
        self.draft = applied;
    }

    pub fn set_font_family(&mut self, option: SettingOption<FontFamily>) {
        self.draft = self.draft.with_font_family(option);
    }

    pub fn set_font_size(&mut self, option: SettingOption<FontSize>) {
        self.draft = self.draft.with_font_size(option);
    }

    pub fn set_font_color(&mut self, option: SettingOption<ColorValue>) {
        self.draft = self.draft.with_font_color(option);
    }

    pub fn set_background_color(&mut self, option: SettingOption<ColorValue>) {
        self.draft = self.draft.with_background_color(option);
    }

    pub fn set_content_width(&mut self, option: SettingOption<ContentWidth>) {
        self.draft = self.draft.with_content_width(option);
    }
}
