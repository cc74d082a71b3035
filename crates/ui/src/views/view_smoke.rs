use squaring_core::model::{PartialSlot, PracticeSettings, Stage};

use super::test_harness::setup_view_harness;
use crate::vm::PracticeIntent;

fn instant_feedback() -> PracticeSettings {
    PracticeSettings::new(0, 3).expect("valid settings")
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_entry_and_keypad() {
    let harness = setup_view_harness(PracticeSettings::default());
    let html = harness.render();
    assert!(html.contains("practice-entry"), "missing entry in {html}");
    for label in ["7", "0", "C", "⌫", "="] {
        assert!(html.contains(&format!(">{label}<")), "missing key {label} in {html}");
    }
    assert!(html.contains("keypad-key--enter"), "missing submit key in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_starts_a_square() {
    let mut harness = setup_view_harness(PracticeSettings::default());
    harness.press_digits("23");
    assert!(harness.render().contains(">23<"));

    harness.dispatch(PracticeIntent::Submit);
    let html = harness.render();
    assert_eq!(harness.stage(), Stage::PartialAnswer(PartialSlot::TensSquared));
    assert!(html.contains("23 × 23 ="), "missing prompt in {html}");
    assert!(html.contains("(20×20)"), "missing first hint in {html}");
    assert!(html.contains("(20×3×2)"), "missing second hint in {html}");
    assert!(html.contains("(3×3)"), "missing third hint in {html}");
    assert!(html.contains("practice-slot--active"), "missing active slot in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_hints_on_invalid_number() {
    let mut harness = setup_view_harness(PracticeSettings::default());
    harness.press_digits("7");
    harness.dispatch(PracticeIntent::Submit);

    let html = harness.render();
    assert_eq!(harness.stage(), Stage::Input);
    assert!(html.contains("Enter a number from 10 to 99."), "missing hint in {html}");
    assert!(!html.contains("practice-banner"), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_shows_wrong_attempts() {
    let mut harness = setup_view_harness(PracticeSettings::default());
    harness.press_digits("23");
    harness.dispatch(PracticeIntent::Submit);
    harness.press_digits("399");
    harness.dispatch(PracticeIntent::Submit);

    let html = harness.render();
    assert!(html.contains("Try again! (1/3)"), "missing failure banner in {html}");
    assert_eq!(harness.stage(), Stage::PartialAnswer(PartialSlot::TensSquared));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_advances_after_feedback_window() {
    let mut harness = setup_view_harness(instant_feedback());
    harness.press_digits("23");
    harness.dispatch(PracticeIntent::Submit);
    harness.press_digits("400");
    harness.dispatch(PracticeIntent::Submit);
    assert!(harness.render().contains("Great!"));

    for _ in 0..20 {
        if harness.stage() == Stage::PartialAnswer(PartialSlot::CrossTerm) {
            break;
        }
        harness.drive_async().await;
    }

    let html = harness.render();
    assert_eq!(harness.stage(), Stage::PartialAnswer(PartialSlot::CrossTerm));
    assert!(!html.contains("Great!"), "banner still visible in {html}");
    assert!(html.contains(">400<"), "missing first answer in {html}");
}
