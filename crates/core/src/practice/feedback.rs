use chrono::{DateTime, Utc};

use crate::model::{AnswerStep, Stage};

/// Identifies one scheduled feedback transition.
///
/// Every scored submission gets a fresh ticket; only the most recent one can
/// still be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackTicket(u64);

impl FeedbackTicket {
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Result of the latest submission, shown until its feedback window ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastResult {
    pub correct: bool,
}

/// What happens when a feedback window ends.
///
/// Captured when the answer is scored, so later edits to the live session do
/// not change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Wrong answer: only hide the banner.
    Dismiss,
    /// Correct partial answer: move on to the given step.
    Advance(AnswerStep),
    /// Correct sum: start over with a new number.
    Reset,
}

impl DeferredAction {
    /// True when the action moves the session to another stage.
    #[must_use]
    pub fn is_transition(self) -> bool {
        !matches!(self, DeferredAction::Dismiss)
    }
}

/// The one feedback transition currently waiting for its window to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFeedback {
    pub ticket: FeedbackTicket,
    pub due_at: DateTime<Utc>,
    pub action: DeferredAction,
}

impl PendingFeedback {
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.due_at
    }
}

/// What resolving a ticket did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The ticket was superseded or already resolved; nothing changed.
    Stale,
    /// The banner was hidden; the stage is unchanged.
    Dismissed,
    /// The banner was hidden and the session moved to a new stage.
    Advanced(Stage),
    /// The banner was hidden and the session went back to number entry.
    Reset,
}
