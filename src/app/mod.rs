//! The reader host
//!
//! `ReaderApp` owns the applied configuration, the settings panel and the
//! article, and routes terminal events between them.

mod input;
mod render;

use crate::article::{
    AppliedSettings, Article, ArticleConfiguration, ArticleStyle, DraftSettings, StyleVariables,
};
use crate::config::{Config, ConfigError};
use crate::view::controls::{ArrowButtonLayout, ArrowButtonState};
use crate::view::panel::{DocumentListeners, PanelController, PanelEvent};
use crate::view::settings::{FormCommand, SettingsForm};

/// The article reader with its slide-out settings panel
pub struct ReaderApp {
    config: Config,
    settings: AppliedSettings,
    /// Presentation hints for the applied configuration
    style: ArticleStyle,
    form: SettingsForm,
    listeners: DocumentListeners<PanelEvent>,
    panel: PanelController,
    arrow: ArrowButtonState,
    arrow_layout: ArrowButtonLayout,
    article: Article,
    should_quit: bool,
}

impl ReaderApp {
    /// Create the reader; the default configuration comes from `config`
    pub fn new(config: Config, article: Article) -> Result<Self, ConfigError> {
        let default = config.resolve_default_configuration()?;
        Ok(Self::with_default(config, default, article))
    }

    fn with_default(config: Config, default: ArticleConfiguration, article: Article) -> Self {
        let settings = AppliedSettings::new(default);
        let style = ArticleStyle::from_variables(settings.style_variables());
        let listeners = DocumentListeners::new();
        let panel = PanelController::new(&listeners);

        tracing::info!(
            title = %article.title,
            paragraphs = article.paragraphs.len(),
            "Reader created"
        );

        Self {
            config,
            form: SettingsForm::new(default),
            settings,
            style,
            listeners,
            panel,
            arrow: ArrowButtonState::new(false),
            arrow_layout: ArrowButtonLayout::default(),
            article,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn applied(&self) -> ArticleConfiguration {
        self.settings.applied()
    }

    pub fn style_variables(&self) -> &StyleVariables {
        self.settings.style_variables()
    }

    pub fn article_style(&self) -> &ArticleStyle {
        &self.style
    }

    pub fn draft(&self) -> &DraftSettings {
        self.form.draft()
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Number of live document listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open or close the settings panel
    ///
    /// Opening starts a fresh draft from the applied configuration.
    pub fn toggle_panel(&mut self) {
        if !self.panel.is_open() {
            self.form.reseed(self.settings.applied());
        }
        self.panel.toggle();
        self.sync_arrow();
    }

    pub fn close_panel(&mut self) {
        self.panel.close();
        self.sync_arrow();
    }

    fn handle_panel_event(&mut self, event: PanelEvent) {
        self.panel.handle(event);
        self.sync_arrow();
    }

    fn sync_arrow(&mut self) {
        self.arrow.is_open = self.panel.is_open();
    }

    /// Carry out a command from the settings form
    pub fn apply_command(&mut self, command: FormCommand) {
        match command {
            FormCommand::Apply(draft) => self.settings.apply_draft(&draft),
            FormCommand::Reset => {
                self.settings.reset_to_default(self.form.draft_mut());
                self.form.sync_controls();
            }
        }
        self.style = ArticleStyle::from_variables(self.settings.style_variables());
    }
}
