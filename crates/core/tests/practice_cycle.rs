use squaring_core::model::{Digit, Equation, PartialSlot, PracticeSettings, Stage};
use squaring_core::time::fixed_clock;
use squaring_core::{LastResult, PracticeSession, ResolveOutcome, SubmitOutcome};

fn press(session: &mut PracticeSession, text: &str) {
    for ch in text.chars() {
        session.append_digit(Digit::try_from(ch).unwrap());
    }
}

#[test]
fn full_round_then_next_number() {
    let settings = PracticeSettings::default();
    let mut clock = fixed_clock();
    let mut session = PracticeSession::new(settings);

    for number in ["23", "87"] {
        let equation = Equation::parse(number).unwrap();
        press(&mut session, number);
        assert!(matches!(
            session.submit(clock.now()),
            SubmitOutcome::Started(_)
        ));

        let [tens_sq, cross, ones_sq] = equation.parts();
        let answers = [
            tens_sq.to_string(),
            cross.to_string(),
            ones_sq.to_string(),
            equation.sum().to_string(),
        ];
        for answer in &answers {
            press(&mut session, answer);
            let outcome = session.submit(clock.now());
            assert!(
                matches!(outcome, SubmitOutcome::Scored { correct: true, .. }),
                "{number}: {answer} -> {outcome:?}"
            );
            assert_eq!(session.last_result(), Some(LastResult { correct: true }));

            clock.advance_ms(settings.feedback_window_ms());
            assert!(session.resolve_due(clock.now()).is_some());
            assert_eq!(session.last_result(), None);
        }

        assert_eq!(session.stage(), Stage::Input);
        assert_eq!(session.base_number(), None);
    }
}

#[test]
fn struggling_learner_sees_the_answer_then_recovers() {
    let mut clock = fixed_clock();
    let mut session = PracticeSession::default();
    press(&mut session, "23");
    session.submit(clock.now());

    for attempt in 1..=3_u8 {
        press(&mut session, "399");
        session.submit(clock.now());
        assert_eq!(session.wrong_attempts(), attempt);
        clock.advance_ms(1_000);
        assert_eq!(session.resolve_due(clock.now()), Some(ResolveOutcome::Dismissed));
        session.clear();
    }
    assert!(session.reveal_answer());
    assert_eq!(session.revealed_value(), Some(400));

    press(&mut session, "400");
    session.submit(clock.now());
    clock.advance_ms(1_000);
    assert_eq!(
        session.resolve_due(clock.now()),
        Some(ResolveOutcome::Advanced(Stage::PartialAnswer(
            PartialSlot::CrossTerm
        )))
    );
    assert_eq!(session.wrong_attempts(), 0);
    assert!(!session.reveal_answer());
}
