use crate::common::harness::ReaderTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use customizer::article::catalog::DEFAULT_ARTICLE_STATE;
use proptest::prelude::*;

/// Keys that edit the draft or move around the form but never submit it
fn editing_key() -> impl Strategy<Value = (KeyCode, KeyModifiers)> {
    prop_oneof![
        Just((KeyCode::Tab, KeyModifiers::NONE)),
        Just((KeyCode::BackTab, KeyModifiers::SHIFT)),
        Just((KeyCode::Left, KeyModifiers::NONE)),
        Just((KeyCode::Right, KeyModifiers::NONE)),
        Just((KeyCode::Up, KeyModifiers::NONE)),
        Just((KeyCode::Down, KeyModifiers::NONE)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whatever happens in the panel, the article keeps its configuration
    /// until Apply, and closing the panel releases its listener.
    #[test]
    fn prop_draft_edits_never_leak(keys in prop::collection::vec(editing_key(), 0..24)) {
        let mut harness = ReaderTestHarness::new(100, 30).unwrap();
        harness.render().unwrap();
        harness.press(KeyCode::F(2)).unwrap();

        for (code, modifiers) in keys {
            harness.send_key(code, modifiers).unwrap();
            prop_assert_eq!(harness.app().applied(), DEFAULT_ARTICLE_STATE);
        }

        harness.click(80, 5).unwrap();
        prop_assert!(!harness.app().is_panel_open());
        prop_assert_eq!(harness.app().listener_count(), 0);
        prop_assert_eq!(harness.app().applied(), DEFAULT_ARTICLE_STATE);

        harness.press(KeyCode::F(2)).unwrap();
        prop_assert_eq!(harness.app().draft().current(), DEFAULT_ARTICLE_STATE);
    }
}
