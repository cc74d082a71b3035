//! The squaring practice state machine.

mod feedback;
mod session;

pub use feedback::{DeferredAction, FeedbackTicket, LastResult, PendingFeedback, ResolveOutcome};
pub use session::{PracticeSession, SubmitOutcome};
