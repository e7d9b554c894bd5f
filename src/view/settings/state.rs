//! Parameters form state
//!
//! Owns the draft and one control per configuration slot. Controls only
//! mirror the draft; every change they report is written into the draft,
//! and `sync_controls` pushes the draft back into them after a reseed.

use super::layout::SettingsLayout;
use crate::article::catalog::{
    BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
use crate::article::{
    ArticleConfiguration, ColorValue, ContentWidth, DraftSettings, FontFamily, FontSize,
};
use crate::view::controls::{
    ButtonKind, ButtonState, FocusState, HtmlType, RadioGroupState, SelectState,
};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
    Reset,
    Apply,
}

impl FocusField {
    pub const ALL: [FocusField; 7] = [
        FocusField::FontFamily,
        FocusField::FontSize,
        FocusField::FontColor,
        FocusField::BackgroundColor,
        FocusField::ContentWidth,
        FocusField::Reset,
        FocusField::Apply,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// What the host must do after the form handled an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// The form was submitted; commit this snapshot of the draft
    Apply(DraftSettings),
    /// Reset both draft and applied configuration to the default
    Reset,
}

/// State of the "Set parameters" form
#[derive(Debug)]
pub struct SettingsForm {
    draft: DraftSettings,
    pub font_family: SelectState<FontFamily>,
    pub font_size: RadioGroupState<FontSize>,
    pub font_color: SelectState<ColorValue>,
    pub background_color: SelectState<ColorValue>,
    pub content_width: SelectState<ContentWidth>,
    pub reset_button: ButtonState,
    pub apply_button: ButtonState,
    /// Field with keyboard focus
    pub focus: FocusField,
    /// Layout from the last render, for mouse hit testing
    pub layout: SettingsLayout,
}

impl SettingsForm {
    /// Build the form with its draft seeded from `applied`
    pub fn new(applied: ArticleConfiguration) -> Self {
        let mut form = Self {
            draft: DraftSettings::new(applied),
            font_family: SelectState::new("Font", FONT_FAMILY_OPTIONS, applied.font_family_option)
                .with_placeholder("Choose a font"),
            font_size: RadioGroupState::new(
                "fontSize",
                "Font size",
                FONT_SIZE_OPTIONS,
                applied.font_size_option,
            ),
            font_color: SelectState::new("Font color", FONT_COLORS, applied.font_color)
                .with_placeholder("Choose a color"),
            background_color: SelectState::new(
                "Background color",
                BACKGROUND_COLORS,
                applied.background_color,
            )
            .with_placeholder("Choose a color"),
            content_width: SelectState::new(
                "Content width",
                CONTENT_WIDTH_OPTIONS,
                applied.content_width,
            )
            .with_placeholder("Choose a width"),
            reset_button: ButtonState::new("Reset", HtmlType::Reset, ButtonKind::Clear),
            apply_button: ButtonState::new("Apply", HtmlType::Submit, ButtonKind::Apply),
            focus: FocusField::default(),
            layout: SettingsLayout::default(),
        };
        form.update_focus_states();
        form
    }

    pub fn draft(&self) -> &DraftSettings {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftSettings {
        &mut self.draft
    }

    /// Start a fresh editing session from `applied`
    ///
    /// Called each time the panel opens; edits left from an earlier
    /// session that was closed without submitting are discarded.
    pub fn reseed(&mut self, applied: ArticleConfiguration) {
        self.draft.reseed(applied);
        self.cancel_selects();
        self.focus = FocusField::default();
        self.update_focus_states();
        self.sync_controls();
    }

    /// Mirror the draft into every control
    pub fn sync_controls(&mut self) {
        let draft = self.draft.current();
        self.font_family.set_selected(draft.font_family_option);
        self.font_size.set_selected(draft.font_size_option);
        self.font_color.set_selected(draft.font_color);
        self.background_color.set_selected(draft.background_color);
        self.content_width.set_selected(draft.content_width);
    }

    /// Submit the form
    pub fn submit(&mut self) -> FormCommand {
        self.cancel_selects();
        tracing::debug!("settings form submitted");
        FormCommand::Apply(self.draft.clone())
    }

    /// Reset the form; never submits
    pub fn reset(&mut self) -> FormCommand {
        self.cancel_selects();
        tracing::debug!("settings form reset");
        FormCommand::Reset
    }

    /// Field whose option list is open, if any
    pub fn open_select(&self) -> Option<FocusField> {
        if self.font_family.open {
            Some(FocusField::FontFamily)
        } else if self.font_color.open {
            Some(FocusField::FontColor)
        } else if self.background_color.open {
            Some(FocusField::BackgroundColor)
        } else if self.content_width.open {
            Some(FocusField::ContentWidth)
        } else {
            None
        }
    }

    pub fn has_open_select(&self) -> bool {
        self.open_select().is_some()
    }

    /// Close every option list without choosing
    pub fn cancel_selects(&mut self) {
        self.font_family.cancel();
        self.font_color.cancel();
        self.background_color.cancel();
        self.content_width.cancel();
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, field: FocusField) {
        if field != self.focus {
            self.cancel_selects();
        }
        self.focus = field;
        self.update_focus_states();
    }

    /// Push the focused field into the controls' focus states
    pub fn update_focus_states(&mut self) {
        let focus_for = |field: FocusField| {
            if field == self.focus {
                FocusState::Focused
            } else {
                FocusState::Normal
            }
        };
        let family = focus_for(FocusField::FontFamily);
        let size = focus_for(FocusField::FontSize);
        let color = focus_for(FocusField::FontColor);
        let background = focus_for(FocusField::BackgroundColor);
        let width = focus_for(FocusField::ContentWidth);
        let reset = focus_for(FocusField::Reset);
        let apply = focus_for(FocusField::Apply);

        self.font_family.focus = family;
        self.font_size.focus = size;
        self.font_color.focus = color;
        self.background_color.focus = background;
        self.content_width.focus = width;
        self.reset_button.focus = reset;
        self.apply_button.focus = apply;
    }
}
