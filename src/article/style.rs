//! Style projection
//!
//! Maps an applied configuration to named style variables, and turns those
//! variables into presentation hints a terminal can honor.

use std::collections::BTreeMap;
use std::fmt;

use ratatui::style::{Color, Modifier, Style};

use super::configuration::ArticleConfiguration;
use super::option::CatalogValue;

/// Pixels per terminal column when converting content widths
pub const PIXELS_PER_COLUMN: u16 = 12;

/// Named style variables published to the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleVariable {
    FontFamily,
    FontSize,
    FontColor,
    ContainerWidth,
    BgColor,
}

impl StyleVariable {
    pub const ALL: [StyleVariable; 5] = [
        StyleVariable::FontFamily,
        StyleVariable::FontSize,
        StyleVariable::FontColor,
        StyleVariable::ContainerWidth,
        StyleVariable::BgColor,
    ];

    /// Variable name as the rendering surface knows it
    pub fn name(self) -> &'static str {
        match self {
            StyleVariable::FontFamily => "--font-family",
            StyleVariable::FontSize => "--font-size",
            StyleVariable::FontColor => "--font-color",
            StyleVariable::ContainerWidth => "--container-width",
            StyleVariable::BgColor => "--bg-color",
        }
    }
}

impl fmt::Display for StyleVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping of style variable to value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleVariables(BTreeMap<StyleVariable, String>);

impl StyleVariables {
    pub fn get(&self, variable: StyleVariable) -> Option<&str> {
        self.0.get(&variable).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleVariable, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `name: value;` declarations, one per line
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(variable, value)| format!("{}: {};", variable.name(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Project a configuration into style variables.
///
/// Only ever called with the applied configuration.
pub fn project(config: &ArticleConfiguration) -> StyleVariables {
    let mut vars = BTreeMap::new();
    vars.insert(
        StyleVariable::FontFamily,
        config.font_family_option.value.as_str().to_string(),
    );
    vars.insert(
        StyleVariable::FontSize,
        config.font_size_option.value.as_str().to_string(),
    );
    vars.insert(
        StyleVariable::FontColor,
        config.font_color.value.as_str().to_string(),
    );
    vars.insert(
        StyleVariable::ContainerWidth,
        config.content_width.value.as_str().to_string(),
    );
    vars.insert(
        StyleVariable::BgColor,
        config.background_color.value.as_str().to_string(),
    );
    StyleVariables(vars)
}

/// Parse `#RRGGBB` (or `#RGB`) into an RGB color
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

/// Parse a `px` length into a pixel count
pub fn parse_pixels(value: &str) -> Option<u16> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Terminal presentation hints derived from the style variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStyle {
    /// Font family name (shown in the article header)
    pub font_family: String,
    /// Text foreground
    pub fg: Color,
    /// Article background
    pub bg: Color,
    /// Maximum text column width
    pub max_columns: u16,
    /// Extra modifiers for body text
    pub modifiers: Modifier,
    /// Blank lines inserted between wrapped lines
    pub line_gap: u16,
}

impl ArticleStyle {
    /// Build presentation hints from projected variables.
    ///
    /// Values the terminal cannot express fall back to neutral hints.
    pub fn from_variables(vars: &StyleVariables) -> Self {
        let font_family = vars
            .get(StyleVariable::FontFamily)
            .unwrap_or_default()
            .to_string();

        let fg = color_or_reset(vars, StyleVariable::FontColor);
        let bg = color_or_reset(vars, StyleVariable::BgColor);

        let max_columns = vars
            .get(StyleVariable::ContainerWidth)
            .and_then(parse_pixels)
            .map(|px| (px / PIXELS_PER_COLUMN).max(1))
            .unwrap_or(u16::MAX);

        let size_px = vars
            .get(StyleVariable::FontSize)
            .and_then(parse_pixels)
            .unwrap_or(18);
        let (mut modifiers, line_gap) = match size_px {
            0..=20 => (Modifier::empty(), 0),
            21..=30 => (Modifier::BOLD, 0),
            _ => (Modifier::BOLD, 1),
        };

        if is_serif(&font_family) {
            modifiers |= Modifier::ITALIC;
        }

        Self {
            font_family,
            fg,
            bg,
            max_columns,
            modifiers,
            line_gap,
        }
    }

    /// Style for body text
    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(self.modifiers)
    }

    /// Style for the article background
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.bg)
    }
}

fn color_or_reset(vars: &StyleVariables, variable: StyleVariable) -> Color {
    match vars.get(variable) {
        Some(raw) => parse_hex_color(raw).unwrap_or_else(|| {
            tracing::warn!("Unparseable color for {}: {:?}", variable, raw);
            Color::Reset
        }),
        None => Color::Reset,
    }
}

fn is_serif(family: &str) -> bool {
    matches!(family, "Cormorant Garamond" | "Merriweather")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::catalog::{BACKGROUND_COLORS, DEFAULT_ARTICLE_STATE, FONT_SIZE_OPTIONS};

    #[test]
    fn test_projection_has_five_keys() {
        let vars = project(&DEFAULT_ARTICLE_STATE);
        assert_eq!(vars.len(), 5);
        for variable in StyleVariable::ALL {
            assert!(vars.get(variable).is_some(), "missing {}", variable);
        }
    }

    #[test]
    fn test_projection_values() {
        let vars = project(&DEFAULT_ARTICLE_STATE);
        assert_eq!(vars.get(StyleVariable::FontFamily), Some("Open Sans"));
        assert_eq!(vars.get(StyleVariable::FontSize), Some("18px"));
        assert_eq!(vars.get(StyleVariable::FontColor), Some("#000000"));
        assert_eq!(vars.get(StyleVariable::ContainerWidth), Some("1394px"));
        assert_eq!(vars.get(StyleVariable::BgColor), Some("#FFFFFF"));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let config = DEFAULT_ARTICLE_STATE.with_background_color(BACKGROUND_COLORS[1]);
        assert_eq!(project(&config), project(&config));
    }

    #[test]
    fn test_declarations() {
        let vars = project(&DEFAULT_ARTICLE_STATE);
        let css = vars.to_declarations();
        assert!(css.contains("--bg-color: #FFFFFF;"));
        assert!(css.contains("--font-family: Open Sans;"));
        assert_eq!(css.lines().count(), 5);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_hex_color("#FEAFE8"), Some(Color::Rgb(0xFE, 0xAF, 0xE8)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("1394px"), Some(1394));
        assert_eq!(parse_pixels(" 948px "), Some(948));
        assert_eq!(parse_pixels("948"), None);
        assert_eq!(parse_pixels("wide"), None);
    }

    #[test]
    fn test_article_style_from_defaults() {
        let style = ArticleStyle::from_variables(&project(&DEFAULT_ARTICLE_STATE));
        assert_eq!(style.fg, Color::Rgb(0, 0, 0));
        assert_eq!(style.bg, Color::Rgb(255, 255, 255));
        assert_eq!(style.max_columns, 1394 / PIXELS_PER_COLUMN);
        assert_eq!(style.modifiers, Modifier::empty());
        assert_eq!(style.line_gap, 0);
        assert_eq!(style.font_family, "Open Sans");
    }

    #[test]
    fn test_article_style_large_font() {
        let config = DEFAULT_ARTICLE_STATE.with_font_size(FONT_SIZE_OPTIONS[2]);
        let style = ArticleStyle::from_variables(&project(&config));
        assert!(style.modifiers.contains(Modifier::BOLD));
        assert_eq!(style.line_gap, 1);
    }

    #[test]
    fn test_article_style_tolerates_missing_variables() {
        let style = ArticleStyle::from_variables(&StyleVariables::default());
        assert_eq!(style.fg, Color::Reset);
        assert_eq!(style.bg, Color::Reset);
        assert_eq!(style.max_columns, u16::MAX);
    }
}
