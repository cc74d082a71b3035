#![forbid(unsafe_code)]

pub mod model;
pub mod practice;
pub mod time;

pub use practice::{
    DeferredAction, FeedbackTicket, LastResult, PendingFeedback, PracticeSession,
    ResolveOutcome, SubmitOutcome,
};
pub use time::Clock;
