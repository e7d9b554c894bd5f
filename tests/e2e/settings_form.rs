use crate::common::harness::ReaderTestHarness;
use crossterm::event::KeyCode;
use customizer::article::catalog::{
    BACKGROUND_COLORS, DEFAULT_ARTICLE_STATE, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
use customizer::article::StyleVariable;
use customizer::config::Config;

fn open_panel(harness: &mut ReaderTestHarness) {
    harness.render().unwrap();
    harness.click_text("▶").unwrap();
    assert!(harness.app().is_panel_open());
}

/// Open the background select with the mouse and pick the next option
fn pick_next_background(harness: &mut ReaderTestHarness) {
    let (x, y) = harness.find_text("Background color").unwrap();
    harness.click(x + 1, y + 1).unwrap();
    assert!(harness.app().form().has_open_select());
    harness.press(KeyCode::Down).unwrap();
    harness.press(KeyCode::Enter).unwrap();
    assert!(!harness.app().form().has_open_select());
}

#[test]
fn test_apply_updates_style_variables() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    open_panel(&mut harness);

    pick_next_background(&mut harness);
    assert_eq!(
        harness.app().draft().current().background_color,
        BACKGROUND_COLORS[1]
    );
    // Nothing reaches the article before Apply
    assert_eq!(
        harness.app().style_variables().get(StyleVariable::BgColor),
        Some("#FFFFFF")
    );

    harness.click_text("[ Apply ]").unwrap();
    assert_eq!(harness.app().applied().background_color, BACKGROUND_COLORS[1]);
    assert_eq!(
        harness.app().style_variables().get(StyleVariable::BgColor),
        Some("#000000")
    );
    // Apply leaves the panel open
    assert!(harness.app().is_panel_open());
}

/// Open, pick 24px, dismiss, reopen at 18px, then apply a black background.
#[test]
fn test_discard_then_apply_flow() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    open_panel(&mut harness);

    harness.click_text("24px").unwrap();
    harness.click(80, 5).unwrap();
    assert!(!harness.app().is_panel_open());

    harness.click_text("▶").unwrap();
    harness.assert_screen_contains("(•) 18px");

    pick_next_background(&mut harness);
    harness.click_text("[ Apply ]").unwrap();

    let applied = harness.app().applied();
    assert_eq!(applied.font_size_option, FONT_SIZE_OPTIONS[0]);
    assert_eq!(applied.background_color, BACKGROUND_COLORS[1]);
    let vars = harness.app().style_variables();
    assert_eq!(vars.get(StyleVariable::BgColor), Some("#000000"));
    assert_eq!(vars.get(StyleVariable::FontSize), Some("18px"));
}

#[test]
fn test_select_cancel_by_outside_click_keeps_panel_open() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    open_panel(&mut harness);

    let (x, y) = harness.find_text("Background color").unwrap();
    harness.click(x + 1, y + 1).unwrap();
    assert!(harness.app().form().has_open_select());

    // A press on the heading closes the list without choosing
    harness.click_text("SET PARAMETERS").unwrap();
    assert!(!harness.app().form().has_open_select());
    assert!(harness.app().is_panel_open());
    assert_eq!(
        harness.app().draft().current().background_color,
        BACKGROUND_COLORS[0]
    );
}

#[test]
fn test_reset_restores_defaults_immediately() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    open_panel(&mut harness);

    harness.click_text("38px").unwrap();
    pick_next_background(&mut harness);
    harness.click_text("[ Apply ]").unwrap();
    assert_ne!(harness.app().applied(), DEFAULT_ARTICLE_STATE);

    harness.click_text("[ Reset ]").unwrap();
    assert_eq!(harness.app().applied(), DEFAULT_ARTICLE_STATE);
    assert_eq!(harness.app().draft().current(), DEFAULT_ARTICLE_STATE);
    harness.assert_screen_contains("(•) 18px");
    assert_eq!(
        harness.app().style_variables().get(StyleVariable::BgColor),
        Some("#FFFFFF")
    );
}

#[test]
fn test_reset_returns_to_configured_default() {
    let mut config = Config::default();
    config.defaults.font_family = "Ubuntu".to_string();
    let mut harness = ReaderTestHarness::with_config(config, 100, 30).unwrap();
    open_panel(&mut harness);
    harness.assert_screen_contains("Ubuntu");

    harness.click_text("24px").unwrap();
    harness.click_text("[ Apply ]").unwrap();
    harness.click_text("[ Reset ]").unwrap();

    let applied = harness.app().applied();
    assert_eq!(applied.font_family_option, FONT_FAMILY_OPTIONS[1]);
    assert_eq!(applied.font_size_option, FONT_SIZE_OPTIONS[0]);
}
