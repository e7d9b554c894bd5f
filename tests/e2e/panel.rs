use crate::common::harness::ReaderTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use customizer::article::catalog::{DEFAULT_ARTICLE_STATE, FONT_SIZE_OPTIONS};

#[test]
fn test_panel_starts_closed() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    assert!(!harness.app().is_panel_open());
    harness.assert_screen_contains("▶");
    harness.assert_screen_contains("Human-readable typography");
    harness.assert_screen_not_contains("SET PARAMETERS");
    assert_eq!(harness.app().listener_count(), 0);
}

#[test]
fn test_arrow_click_toggles_panel() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.click_text("▶").unwrap();
    assert!(harness.app().is_panel_open());
    harness.assert_screen_contains("SET PARAMETERS");
    harness.assert_screen_contains("◀");
    assert_eq!(harness.app().listener_count(), 1);

    // The tab sits next to the open panel and counts as inside it
    harness.click_text("◀").unwrap();
    assert!(!harness.app().is_panel_open());
    harness.assert_screen_not_contains("SET PARAMETERS");
    assert_eq!(harness.app().listener_count(), 0);
}

#[test]
fn test_press_without_release_does_not_toggle() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    let (x, y) = harness.find_text("▶").unwrap();
    harness.mouse_down(x, y).unwrap();
    harness.mouse_up(60, 2).unwrap();
    assert!(!harness.app().is_panel_open());
}

#[test]
fn test_click_outside_closes_panel() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.click_text("▶").unwrap();

    harness.click(80, 5).unwrap();
    assert!(!harness.app().is_panel_open());
    assert_eq!(harness.app().listener_count(), 0);
}

#[test]
fn test_click_inside_panel_keeps_it_open() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.click_text("▶").unwrap();

    harness.click_text("SET PARAMETERS").unwrap();
    assert!(harness.app().is_panel_open());
}

#[test]
fn test_outside_click_while_closed_does_nothing() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.click(80, 5).unwrap();
    assert!(!harness.app().is_panel_open());
    assert_eq!(harness.app().applied(), DEFAULT_ARTICLE_STATE);
}

/// Unapplied edits are dropped when the panel closes and the next opening
/// starts from the applied configuration.
#[test]
fn test_reopen_discards_unapplied_edits() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.click_text("▶").unwrap();

    harness.click_text("24px").unwrap();
    assert_eq!(
        harness.app().draft().current().font_size_option,
        FONT_SIZE_OPTIONS[1]
    );
    harness.assert_screen_contains("(•) 24px");
    assert_eq!(harness.app().applied(), DEFAULT_ARTICLE_STATE);

    harness.click(80, 5).unwrap();
    assert!(!harness.app().is_panel_open());

    harness.click_text("▶").unwrap();
    harness.assert_screen_contains("(•) 18px");
    harness.assert_screen_contains("( ) 24px");
    assert_eq!(harness.app().draft().current(), DEFAULT_ARTICLE_STATE);
}

#[test]
fn test_f2_and_escape() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.press(KeyCode::F(2)).unwrap();
    assert!(harness.app().is_panel_open());
    harness.press(KeyCode::Esc).unwrap();
    assert!(!harness.app().is_panel_open());

    harness
        .send_key(KeyCode::Char(','), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().is_panel_open());
    assert_eq!(harness.app().listener_count(), 1);
}

#[test]
fn test_hint_line_follows_config() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.press(KeyCode::F(2)).unwrap();
    harness.assert_screen_contains("Tab move");

    let mut config = customizer::config::Config::default();
    config.show_hints = false;
    let mut harness = ReaderTestHarness::with_config(config, 100, 30).unwrap();
    harness.render().unwrap();
    harness.press(KeyCode::F(2)).unwrap();
    harness.assert_screen_not_contains("Tab move");
}
