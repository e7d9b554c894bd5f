use crate::common::harness::ReaderTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use customizer::article::catalog::{DEFAULT_ARTICLE_STATE, FONT_SIZE_OPTIONS};
use customizer::article::StyleVariable;

#[test]
fn test_keyboard_only_apply() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.press(KeyCode::F(2)).unwrap();

    // Font -> font size
    harness.press(KeyCode::Tab).unwrap();
    harness.press(KeyCode::Right).unwrap();
    assert_eq!(
        harness.app().draft().current().font_size_option,
        FONT_SIZE_OPTIONS[1]
    );

    // Walk back from the font size to Apply
    harness.send_key(KeyCode::BackTab, KeyModifiers::SHIFT).unwrap();
    harness.send_key(KeyCode::BackTab, KeyModifiers::SHIFT).unwrap();
    harness.press(KeyCode::Enter).unwrap();

    assert_eq!(
        harness.app().applied().font_size_option,
        FONT_SIZE_OPTIONS[1]
    );
    assert_eq!(
        harness.app().style_variables().get(StyleVariable::FontSize),
        Some("24px")
    );
}

#[test]
fn test_escape_closes_open_select_before_panel() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.press(KeyCode::F(2)).unwrap();

    harness.press(KeyCode::Enter).unwrap();
    assert!(harness.app().form().has_open_select());
    harness.press(KeyCode::Down).unwrap();

    harness.press(KeyCode::Esc).unwrap();
    assert!(!harness.app().form().has_open_select());
    assert!(harness.app().is_panel_open());
    assert_eq!(harness.app().draft().current(), DEFAULT_ARTICLE_STATE);

    harness.press(KeyCode::Esc).unwrap();
    assert!(!harness.app().is_panel_open());
}

#[test]
fn test_quit_keys() {
    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();
    harness.press(KeyCode::F(2)).unwrap();

    // 'q' is ordinary input while the panel is open
    harness.press(KeyCode::Char('q')).unwrap();
    assert!(!harness.app().should_quit());

    harness.press(KeyCode::Esc).unwrap();
    harness.press(KeyCode::Char('q')).unwrap();
    assert!(harness.app().should_quit());

    let mut harness = ReaderTestHarness::new(100, 30).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.app().should_quit());
}
