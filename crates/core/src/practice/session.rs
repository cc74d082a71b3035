use std::num::IntErrorKind;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::model::{
    AnswerStep, Digit, Equation, EquationError, PartialSlot, PracticeSettings, Stage,
};

use super::feedback::{
    DeferredAction, FeedbackTicket, LastResult, PendingFeedback, ResolveOutcome,
};

/// Longest number that can be typed while choosing what to practice.
const NUMBER_ENTRY_MAX_LEN: usize = 2;

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A two-digit number was committed; the first partial answer is active.
    Started(Equation),
    /// The typed number is not a two-digit number. Nothing changed.
    Rejected(EquationError),
    /// An answer was scored and its feedback window has started.
    Scored {
        correct: bool,
        feedback: PendingFeedback,
    },
    /// A correct answer is already waiting to move the session on.
    Ignored,
}

impl SubmitOutcome {
    /// The feedback transition this submission scheduled, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<PendingFeedback> {
        match self {
            SubmitOutcome::Scored { feedback, .. } => Some(*feedback),
            SubmitOutcome::Started(_) | SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored => {
                None
            }
        }
    }
}

/// Wrong-attempt bookkeeping for the active stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Attempts {
    wrong: u8,
    revealed: bool,
}

impl Attempts {
    fn record_wrong(&mut self, reveal_after: u8) {
        self.wrong = self.wrong.saturating_add(1);
        if self.wrong >= reveal_after {
            self.revealed = true;
        }
    }
}

/// Everything that exists once a number has been committed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Workbook {
    equation: Equation,
    step: AnswerStep,
    partials: [String; 3],
    sum: String,
    attempts: Attempts,
}

impl Workbook {
    fn new(equation: Equation) -> Self {
        Self {
            equation,
            step: AnswerStep::FIRST,
            partials: Default::default(),
            sum: String::new(),
            attempts: Attempts::default(),
        }
    }

    fn entry(&self) -> &str {
        match self.step {
            AnswerStep::Partial(slot) => &self.partials[slot.index()],
            AnswerStep::Sum => &self.sum,
        }
    }

    fn entry_mut(&mut self) -> &mut String {
        match self.step {
            AnswerStep::Partial(slot) => &mut self.partials[slot.index()],
            AnswerStep::Sum => &mut self.sum,
        }
    }

    fn expected(&self) -> u32 {
        match self.step {
            AnswerStep::Partial(slot) => self.equation.part(slot),
            AnswerStep::Sum => self.equation.sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Input { entry: String },
    Working(Workbook),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Input {
            entry: String::new(),
        }
    }
}

/// Reads a typed answer. Empty or non-numeric entries count as zero; a digit
/// string too large for `u64` is `None`, which matches no expected value.
fn parse_answer(entry: &str) -> Option<u64> {
    match entry.parse::<u64>() {
        Ok(value) => Some(value),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => None,
        Err(_) => Some(0),
    }
}

/// One learner working through squares, one number at a time.
///
/// The session cycles forever: number entry, the three partial products, the
/// sum, and back to number entry. Every scored answer opens a feedback window;
/// the caller resolves it with [`PracticeSession::resolve`] once the window
/// has elapsed (or with [`PracticeSession::resolve_due`] against a clock).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    settings: PracticeSettings,
    phase: Phase,
    last_result: Option<LastResult>,
    pending: Option<PendingFeedback>,
    tickets_issued: u64,
}

impl PracticeSession {
    #[must_use]
    pub fn new(settings: PracticeSettings) -> Self {
        Self {
            settings,
            phase: Phase::default(),
            last_result: None,
            pending: None,
            tickets_issued: 0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> PracticeSettings {
        self.settings
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        match &self.phase {
            Phase::Input { .. } => Stage::Input,
            Phase::Working(book) => Stage::from(book.step),
        }
    }

    /// The committed equation, absent while a number is being typed.
    #[must_use]
    pub fn equation(&self) -> Option<&Equation> {
        match &self.phase {
            Phase::Input { .. } => None,
            Phase::Working(book) => Some(&book.equation),
        }
    }

    #[must_use]
    pub fn base_number(&self) -> Option<u8> {
        self.equation().map(Equation::number)
    }

    /// Text of whichever field the keypad currently types into.
    #[must_use]
    pub fn active_entry(&self) -> &str {
        match &self.phase {
            Phase::Input { entry } => entry,
            Phase::Working(book) => book.entry(),
        }
    }

    #[must_use]
    pub fn partial_answer(&self, slot: PartialSlot) -> &str {
        match &self.phase {
            Phase::Input { .. } => "",
            Phase::Working(book) => &book.partials[slot.index()],
        }
    }

    #[must_use]
    pub fn sum_entry(&self) -> &str {
        match &self.phase {
            Phase::Input { .. } => "",
            Phase::Working(book) => &book.sum,
        }
    }

    #[must_use]
    pub fn wrong_attempts(&self) -> u8 {
        match &self.phase {
            Phase::Input { .. } => 0,
            Phase::Working(book) => book.attempts.wrong,
        }
    }

    #[must_use]
    pub fn reveal_answer(&self) -> bool {
        match &self.phase {
            Phase::Input { .. } => false,
            Phase::Working(book) => book.attempts.revealed,
        }
    }

    /// The correct value for the active stage, if the learner may see it.
    #[must_use]
    pub fn revealed_value(&self) -> Option<u32> {
        match &self.phase {
            Phase::Working(book) if book.attempts.revealed => Some(book.expected()),
            Phase::Input { .. } | Phase::Working(_) => None,
        }
    }

    #[must_use]
    pub fn last_result(&self) -> Option<LastResult> {
        self.last_result
    }

    #[must_use]
    pub fn pending_feedback(&self) -> Option<PendingFeedback> {
        self.pending
    }

    /// Types a digit into the active field.
    ///
    /// The number being chosen holds at most two digits; answers are uncapped.
    pub fn append_digit(&mut self, digit: Digit) {
        match &mut self.phase {
            Phase::Input { entry } => {
                if entry.len() < NUMBER_ENTRY_MAX_LEN {
                    entry.push(digit.as_char());
                }
            }
            Phase::Working(book) => book.entry_mut().push(digit.as_char()),
        }
    }

    pub fn backspace(&mut self) {
        self.active_entry_mut().pop();
    }

    /// Empties the active field. Stage and counters are untouched.
    pub fn clear(&mut self) {
        self.active_entry_mut().clear();
    }

    fn active_entry_mut(&mut self) -> &mut String {
        match &mut self.phase {
            Phase::Input { entry } => entry,
            Phase::Working(book) => book.entry_mut(),
        }
    }

    /// Commits the typed number or scores the active answer.
    pub fn submit(&mut self, now: DateTime<Utc>) -> SubmitOutcome {
        if self.pending.is_some_and(|pending| pending.action.is_transition()) {
            trace!("submit ignored while a stage transition is pending");
            return SubmitOutcome::Ignored;
        }

        let reveal_after = self.settings.reveal_after();
        let (step, correct) = match &mut self.phase {
            Phase::Input { entry } => {
                let parsed = Equation::parse(entry);
                return self.commit_number(parsed);
            }
            Phase::Working(book) => {
                let answer = parse_answer(book.entry());
                let expected = book.expected();
                let correct = answer == Some(u64::from(expected));
                if !correct {
                    book.attempts.record_wrong(reveal_after);
                }
                debug!(
                    stage = ?Stage::from(book.step),
                    ?answer,
                    expected,
                    correct,
                    wrong_attempts = book.attempts.wrong,
                    "answer scored"
                );
                (book.step, correct)
            }
        };

        let action = if correct {
            step.next().map_or(DeferredAction::Reset, DeferredAction::Advance)
        } else {
            DeferredAction::Dismiss
        };
        self.last_result = Some(LastResult { correct });
        let feedback = self.schedule(now, action);
        SubmitOutcome::Scored { correct, feedback }
    }

    fn commit_number(&mut self, parsed: Result<Equation, EquationError>) -> SubmitOutcome {
        match parsed {
            Ok(equation) => {
                debug!(number = equation.number(), "practice number committed");
                self.phase = Phase::Working(Workbook::new(equation));
                SubmitOutcome::Started(equation)
            }
            Err(err) => {
                debug!(%err, "practice number rejected");
                SubmitOutcome::Rejected(err)
            }
        }
    }

    fn schedule(&mut self, now: DateTime<Utc>, action: DeferredAction) -> PendingFeedback {
        self.tickets_issued += 1;
        let feedback = PendingFeedback {
            ticket: FeedbackTicket::new(self.tickets_issued),
            due_at: now + self.settings.feedback_window(),
            action,
        };
        if let Some(stale) = self.pending.replace(feedback) {
            trace!(ticket = stale.ticket.value(), "feedback superseded");
        }
        feedback
    }

    /// Ends the feedback window identified by `ticket`.
    ///
    /// Hides the result and applies the transition captured when the answer was
    /// scored. Superseded or already resolved tickets change nothing.
    pub fn resolve(&mut self, ticket: FeedbackTicket) -> ResolveOutcome {
        let Some(pending) = self.pending.filter(|pending| pending.ticket == ticket) else {
            trace!(ticket = ticket.value(), "stale feedback ticket ignored");
            return ResolveOutcome::Stale;
        };
        self.pending = None;
        self.last_result = None;

        match pending.action {
            DeferredAction::Dismiss => ResolveOutcome::Dismissed,
            DeferredAction::Advance(step) => {
                if let Phase::Working(book) = &mut self.phase {
                    book.step = step;
                    book.attempts = Attempts::default();
                }
                let stage = Stage::from(step);
                debug!(?stage, "stage advanced");
                ResolveOutcome::Advanced(stage)
            }
            DeferredAction::Reset => {
                self.phase = Phase::default();
                debug!("square completed, back to number entry");
                ResolveOutcome::Reset
            }
        }
    }

    /// Resolves the pending feedback if its window has elapsed at `now`.
    pub fn resolve_due(&mut self, now: DateTime<Utc>) -> Option<ResolveOutcome> {
        let pending = self.pending.filter(|pending| pending.is_due(now))?;
        Some(self.resolve(pending.ticket))
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new(PracticeSettings::default())
    }
}
