//! Settings application bridge
//!
//! Owns the applied configuration. `apply_draft` and `reset_to_default` are
//! the only ways it changes, and every change re-projects the style
//! variables.

use super::configuration::ArticleConfiguration;
use super::draft::DraftSettings;
use super::style::{project, StyleVariables};

/// The configuration currently in effect for rendering
#[derive(Debug, Clone)]
pub struct AppliedSettings {
    applied: ArticleConfiguration,
    default: ArticleConfiguration,
    style: StyleVariables,
}

impl AppliedSettings {
    /// Start from the process default configuration
    pub fn new(default: ArticleConfiguration) -> Self {
        Self {
            applied: default,
            default,
            style: project(&default),
        }
    }

    pub fn applied(&self) -> ArticleConfiguration {
        self.applied
    }

    pub fn default_configuration(&self) -> ArticleConfiguration {
        self.default
    }

    /// Style variables projected from the applied configuration
    pub fn style_variables(&self) -> &StyleVariables {
        &self.style
    }

    /// Commit a draft. This is a full replacement, not a merge.
    pub fn apply_draft(&mut self, draft: &DraftSettings) {
        self.replace(draft.current());
    }

    /// Set both the draft and the applied configuration to the default
    pub fn reset_to_default(&mut self, draft: &mut DraftSettings) {
        draft.reseed(self.default);
        self.replace(self.default);
    }

    fn replace(&mut self, config: ArticleConfiguration) {
        if config == self.applied {
            tracing::debug!("Applied configuration unchanged");
        } else {
            tracing::info!(
                font_family = %config.font_family_option.value,
                font_size = %config.font_size_option.value,
                font_color = %config.font_color.value,
                background_color = %config.background_color.value,
                content_width = %config.content_width.value,
                "Applying article settings"
            );
        }
        self.applied = config;
        self.style = project(&self.applied);
        tracing::debug!("Style variables: {}", self.style.to_declarations());
    }
}
