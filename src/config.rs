use crate::article::catalog::{
    self, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, DEFAULT_ARTICLE_STATE, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
use crate::article::{ArticleConfiguration, CatalogValue, SettingOption};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The configuration the article starts with and Reset returns to
    #[serde(default)]
    pub defaults: DefaultSettings,

    /// Width of the settings panel in columns
    #[serde(default = "default_panel_width")]
    pub panel_width: u16,

    /// Show the key hint line at the bottom of the panel
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

/// Default article settings, named by option value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: String,

    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    #[serde(default = "default_content_width")]
    pub content_width: String,
}

fn default_panel_width() -> u16 {
    36
}

fn default_true() -> bool {
    true
}

fn default_font_family() -> String {
    DEFAULT_ARTICLE_STATE.font_family_option.value.to_string()
}

fn default_font_size() -> String {
    DEFAULT_ARTICLE_STATE.font_size_option.value.to_string()
}

fn default_font_color() -> String {
    DEFAULT_ARTICLE_STATE.font_color.value.to_string()
}

fn default_background_color() -> String {
    DEFAULT_ARTICLE_STATE.background_color.value.to_string()
}

fn default_content_width() -> String {
    DEFAULT_ARTICLE_STATE.content_width.value.to_string()
}

/// Narrowest panel that still fits the form's buttons and radio row
const MIN_PANEL_WIDTH: u16 = 28;

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            background_color: default_background_color(),
            content_width: default_content_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultSettings::default(),
            panel_width: default_panel_width(),
            show_hints: default_true(),
        }
    }
}

impl Config {
    /// The config filename used throughout the application
    pub const FILENAME: &'static str = "config.json";

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or use the defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON, as printed by `--dump-config`
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Default config path: `<config dir>/article-customizer/config.json`
    #[cfg(feature = "runtime")]
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("article-customizer").join(Self::FILENAME))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_width < MIN_PANEL_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "panel_width must be at least {MIN_PANEL_WIDTH}"
            )));
        }
        self.resolve_default_configuration().map(|_| ())
    }

    /// Look up each configured default in the option catalog
    pub fn resolve_default_configuration(&self) -> Result<ArticleConfiguration, ConfigError> {
        let d = &self.defaults;
        let config = ArticleConfiguration {
            font_family_option: lookup(FONT_FAMILY_OPTIONS, "font_family", &d.font_family)?,
            font_size_option: lookup(FONT_SIZE_OPTIONS, "font_size", &d.font_size)?,
            font_color: lookup(FONT_COLORS, "font_color", &d.font_color)?,
            background_color: lookup(BACKGROUND_COLORS, "background_color", &d.background_color)?,
            content_width: lookup(CONTENT_WIDTH_OPTIONS, "content_width", &d.content_width)?,
        };
        Ok(config)
    }
}

fn lookup<T: CatalogValue>(
    options: &'static [SettingOption<T>],
    field: &str,
    raw: &str,
) -> Result<SettingOption<T>, ConfigError> {
    catalog::find(options, raw).ok_or_else(|| {
        let known: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        ConfigError::ValidationError(format!(
            "unknown {field} {raw:?}, expected one of: {}",
            known.join(", ")
        ))
    })
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
