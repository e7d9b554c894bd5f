//! Article configuration record

use super::option::{ColorValue, ContentWidth, FontFamily, FontSize, SettingOption};

/// The five presentation slots of an article.
///
/// This is a plain value: every update goes through a `with_*` method that
/// returns a new configuration with exactly one slot replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleConfiguration {
    pub font_family_option: SettingOption<FontFamily>,
    pub font_size_option: SettingOption<FontSize>,
    pub font_color: SettingOption<ColorValue>,
    pub background_color: SettingOption<ColorValue>,
    pub content_width: SettingOption<ContentWidth>,
}

impl ArticleConfiguration {
    pub fn with_font_family(self, option: SettingOption<FontFamily>) -> Self {
        Self {
            font_family_option: option,
            ..self
        }
    }

    pub fn with_font_size(self, option: SettingOption<FontSize>) -> Self {
        Self {
            font_size_option: option,
            ..self
        }
    }

    pub fn with_font_color(self, option: SettingOption<ColorValue>) -> Self {
        Self {
            font_color: option,
            ..self
        }
    }

    pub fn with_background_color(self, option: SettingOption<ColorValue>) -> Self {
        Self {
            background_color: option,
            ..self
        }
    }

    pub fn with_content_width(self, option: SettingOption<ContentWidth>) -> Self {
        Self {
            content_width: option,
            ..self
        }
    }
}

impl Default for ArticleConfiguration {
    fn default() -> Self {
        super::catalog::DEFAULT_ARTICLE_STATE
    }
}
