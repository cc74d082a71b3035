mod digit;
mod equation;
mod settings;
mod stage;

pub use digit::{Digit, DigitError};
pub use equation::{Equation, EquationError, MAX_BASE_NUMBER, MIN_BASE_NUMBER};
pub use settings::{PracticeSettings, SettingsError};
pub use stage::{AnswerStep, PartialSlot, Stage};
