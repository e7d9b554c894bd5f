//! Option catalog
//!
//! The fixed, legal choices for each configurable dimension plus the default
//! article state.

use super::configuration::ArticleConfiguration;
use super::option::{CatalogValue, ColorValue, ContentWidth, FontFamily, FontSize, SettingOption};

pub const FONT_FAMILY_OPTIONS: &[SettingOption<FontFamily>] = &[
    SettingOption::new(FontFamily("Open Sans"), "Open Sans").with_class("open-sans"),
    SettingOption::new(FontFamily("Ubuntu"), "Ubuntu").with_class("ubuntu"),
    SettingOption::new(FontFamily("Cormorant Garamond"), "Cormorant Garamond")
        .with_class("cormorant-garamond"),
    SettingOption::new(FontFamily("Days One"), "Days One").with_class("days-one"),
    SettingOption::new(FontFamily("Merriweather"), "Merriweather").with_class("merriweather"),
];

pub const FONT_SIZE_OPTIONS: &[SettingOption<FontSize>] = &[
    SettingOption::new(FontSize("18px"), "18px").with_class("font-size-18"),
    SettingOption::new(FontSize("24px"), "24px").with_class("font-size-24"),
    SettingOption::new(FontSize("38px"), "38px").with_class("font-size-38"),
];

pub const FONT_COLORS: &[SettingOption<ColorValue>] = &[
    SettingOption::new(ColorValue("#000000"), "Black")
        .with_class("font-black")
        .with_option_class("option-black"),
    SettingOption::new(ColorValue("#FFFFFF"), "White")
        .with_class("font-white")
        .with_option_class("option-white"),
    SettingOption::new(ColorValue("#C4C4C4"), "Gray")
        .with_class("font-gray")
        .with_option_class("option-gray"),
    SettingOption::new(ColorValue("#FEAFE8"), "Pink")
        .with_class("font-pink")
        .with_option_class("option-pink"),
    SettingOption::new(ColorValue("#FD24AF"), "Hot pink")
        .with_class("font-fuchsia")
        .with_option_class("option-fuchsia"),
    SettingOption::new(ColorValue("#FFC802"), "Yellow")
        .with_class("font-yellow")
        .with_option_class("option-yellow"),
    SettingOption::new(ColorValue("#80D994"), "Green")
        .with_class("font-green")
        .with_option_class("option-green"),
    SettingOption::new(ColorValue("#6FC1FD"), "Light blue")
        .with_class("font-blue")
        .with_option_class("option-blue"),
    SettingOption::new(ColorValue("#5F2AF8"), "Purple")
        .with_class("font-purple")
        .with_option_class("option-purple"),
];

pub const BACKGROUND_COLORS: &[SettingOption<ColorValue>] = &[
    SettingOption::new(ColorValue("#FFFFFF"), "White")
        .with_class("bg-white")
        .with_option_class("option-white"),
    SettingOption::new(ColorValue("#000000"), "Black")
        .with_class("bg-black")
        .with_option_class("option-black"),
    SettingOption::new(ColorValue("#C4C4C4"), "Gray")
        .with_class("bg-gray")
        .with_option_class("option-gray"),
    SettingOption::new(ColorValue("#FEAFE8"), "Pink")
        .with_class("bg-pink")
        .with_option_class("option-pink"),
    SettingOption::new(ColorValue("#FFC802"), "Yellow")
        .with_class("bg-yellow")
        .with_option_class("option-yellow"),
    SettingOption::new(ColorValue("#80D994"), "Green")
        .with_class("bg-green")
        .with_option_class("option-green"),
    SettingOption::new(ColorValue("#6FC1FD"), "Light blue")
        .with_class("bg-blue")
        .with_option_class("option-blue"),
    SettingOption::new(ColorValue("#5F2AF8"), "Purple")
        .with_class("bg-purple")
        .with_option_class("option-purple"),
];

pub const CONTENT_WIDTH_OPTIONS: &[SettingOption<ContentWidth>] = &[
    SettingOption::new(ContentWidth("1394px"), "Wide")
        .with_class("width-wide")
        .with_option_class("option-wide"),
    SettingOption::new(ContentWidth("948px"), "Narrow")
        .with_class("width-narrow")
        .with_option_class("option-narrow"),
];

/// The distinguished default article state, used at startup and as the reset
/// target unless the startup config names another one.
pub const DEFAULT_ARTICLE_STATE: ArticleConfiguration = ArticleConfiguration {
    font_family_option: FONT_FAMILY_OPTIONS[0],
    font_size_option: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

/// Look up an option by its raw value
pub fn find<T: CatalogValue>(
    options: &'static [SettingOption<T>],
    raw: &str,
) -> Option<SettingOption<T>> {
    options
        .iter()
        .find(|option| option.value.as_str().eq_ignore_ascii_case(raw))
        .copied()
}

/// Index of an option within its catalog list
pub fn position<T: CatalogValue>(
    options: &[SettingOption<T>],
    option: &SettingOption<T>,
) -> Option<usize> {
    options.iter().position(|candidate| candidate == option)
}

/// Check that every slot of a configuration holds a catalog value
pub fn contains_configuration(config: &ArticleConfiguration) -> bool {
    position(FONT_FAMILY_OPTIONS, &config.font_family_option).is_some()
        && position(FONT_SIZE_OPTIONS, &config.font_size_option).is_some()
        && position(FONT_COLORS, &config.font_color).is_some()
        && position(BACKGROUND_COLORS, &config.background_color).is_some()
        && position(CONTENT_WIDTH_OPTIONS, &config.content_width).is_some()
}
