//! Catalog option types
//!
//! A `SettingOption<T>` is one legal choice for a configuration slot. The
//! value types are distinct newtypes so that an option for one slot can never
//! be placed in another.

use std::fmt;

/// Raw access to the string a catalog value carries.
///
/// Every slot value is ultimately a style-variable string (a font name, a
/// pixel size, a hex color). This trait lets generic controls and the config
/// loader look options up by that string.
pub trait CatalogValue: Copy + PartialEq + fmt::Debug + 'static {
    /// The raw value as published to the rendering surface
    fn as_str(&self) -> &'static str;
}

macro_rules! catalog_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub &'static str);

        impl CatalogValue for $name {
            fn as_str(&self) -> &'static str {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.0)
            }
        }
    };
}

catalog_value!(
    /// Font family name, e.g. `"Open Sans"`
    FontFamily
);
catalog_value!(
    /// Font size with unit, e.g. `"18px"`
    FontSize
);
catalog_value!(
    /// Hex color, e.g. `"#FFFFFF"`
    ColorValue
);
catalog_value!(
    /// Content width with unit, e.g. `"1394px"`
    ContentWidth
);

/// One catalog-defined choice for a configuration slot.
///
/// Equality compares `value` only: two options with the same value are the
/// same choice even if their labels differ.
#[derive(Debug, Clone, Copy)]
pub struct SettingOption<T> {
    /// The value published to the style projection
    pub value: T,
    /// Display name shown in the controls
    pub title: &'static str,
    /// Class hint for the rendered value (e.g. `"font-black"`)
    pub class_name: Option<&'static str>,
    /// Class hint for the option row inside a select list
    pub option_class_name: Option<&'static str>,
}

impl<T> SettingOption<T> {
    /// Create an option without class hints
    pub const fn new(value: T, title: &'static str) -> Self {
        Self {
            value,
            title,
            class_name: None,
            option_class_name: None,
        }
    }

    /// Attach a class hint
    pub const fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    /// Attach a class hint for the option row
    pub const fn with_option_class(mut self, option_class_name: &'static str) -> Self {
        self.option_class_name = Some(option_class_name);
        self
    }
}

impl<T: PartialEq> PartialEq for SettingOption<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for SettingOption<T> {}
