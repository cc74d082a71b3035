use chrono::{DateTime, Utc};
use squaring_core::model::{Digit, Equation, PartialSlot, PracticeSettings, Stage};
use squaring_core::{
    FeedbackTicket, PendingFeedback, PracticeSession, ResolveOutcome, SubmitOutcome,
};

/// Shown after submitting something that is not a two-digit number.
pub const INVALID_NUMBER_HINT: &str = "Enter a number from 10 to 99.";

const SUM_LABEL: &str = "Enter the sum of the three values:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    Digit(Digit),
    Backspace,
    Clear,
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVm {
    pub text: String,
    pub filled: bool,
    pub active: bool,
}

impl SlotVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.active, self.filled) {
            (true, _) => "practice-slot practice-slot--active",
            (false, true) => "practice-slot",
            (false, false) => "practice-slot practice-slot--hint",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumBoxVm {
    pub label: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayVm {
    /// Choosing the number to square.
    Entry { text: String },
    /// Working through the expansion of a committed number.
    Working {
        prompt: String,
        slots: Vec<SlotVm>,
        sum: Option<SumBoxVm>,
        reveal: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerVm {
    pub success: bool,
    pub message: String,
}

impl BannerVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.success {
            "practice-banner practice-banner--success"
        } else {
            "practice-banner practice-banner--failure"
        }
    }
}

fn slot_hint(equation: &Equation, slot: PartialSlot) -> String {
    let tens = equation.tens();
    let ones = equation.ones();
    match slot {
        PartialSlot::TensSquared => format!("({tens}×{tens})"),
        PartialSlot::CrossTerm => format!("({tens}×{ones}×2)"),
        PartialSlot::OnesSquared => format!("({ones}×{ones})"),
    }
}

fn or_zero(entry: &str) -> String {
    if entry.is_empty() {
        "0".to_string()
    } else {
        entry.to_string()
    }
}

pub struct PracticeVm {
    session: PracticeSession,
    input_hint: Option<&'static str>,
}

impl PracticeVm {
    #[must_use]
    pub fn new(settings: PracticeSettings) -> Self {
        Self {
            session: PracticeSession::new(settings),
            input_hint: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    #[must_use]
    pub fn input_hint(&self) -> Option<&'static str> {
        self.input_hint
    }

    /// Applies one key press. Returns the feedback window to schedule, if the
    /// press scored an answer.
    pub fn dispatch(
        &mut self,
        intent: PracticeIntent,
        now: DateTime<Utc>,
    ) -> Option<PendingFeedback> {
        self.input_hint = None;
        match intent {
            PracticeIntent::Digit(digit) => {
                self.session.append_digit(digit);
                None
            }
            PracticeIntent::Backspace => {
                self.session.backspace();
                None
            }
            PracticeIntent::Clear => {
                self.session.clear();
                None
            }
            PracticeIntent::Submit => match self.session.submit(now) {
                SubmitOutcome::Rejected(_) => {
                    self.input_hint = Some(INVALID_NUMBER_HINT);
                    None
                }
                outcome => outcome.feedback(),
            },
        }
    }

    pub fn resolve(&mut self, ticket: FeedbackTicket) -> ResolveOutcome {
        self.session.resolve(ticket)
    }

    #[must_use]
    pub fn display(&self) -> DisplayVm {
        let session = &self.session;
        let Some(equation) = session.equation() else {
            return DisplayVm::Entry {
                text: or_zero(session.active_entry()),
            };
        };

        let stage = session.stage();
        let number = equation.number();
        let slots = PartialSlot::ALL
            .into_iter()
            .map(|slot| {
                let entry = session.partial_answer(slot);
                SlotVm {
                    text: if entry.is_empty() {
                        slot_hint(equation, slot)
                    } else {
                        entry.to_string()
                    },
                    filled: !entry.is_empty(),
                    active: stage == Stage::PartialAnswer(slot),
                }
            })
            .collect();
        let sum = (stage == Stage::SumAnswer).then(|| SumBoxVm {
            label: SUM_LABEL,
            text: or_zero(session.sum_entry()),
        });
        let reveal = session
            .revealed_value()
            .map(|value| format!("Answer: {value}"));

        DisplayVm::Working {
            prompt: format!("{number} × {number} ="),
            slots,
            sum,
            reveal,
        }
    }

    #[must_use]
    pub fn banner(&self) -> Option<BannerVm> {
        let result = self.session.last_result()?;
        let message = if result.correct {
            "Great!".to_string()
        } else {
            format!(
                "Try again! ({}/{})",
                self.session.wrong_attempts(),
                self.session.settings().reveal_after()
            )
        };
        Some(BannerVm {
            success: result.correct,
            message,
        })
    }
}
