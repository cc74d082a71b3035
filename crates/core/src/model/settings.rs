use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("feedback window must be at most {max} ms, got {got}")]
    InvalidFeedbackWindow { got: u32, max: u32 },

    #[error("reveal threshold must be between 1 and {max}, got {got}")]
    InvalidRevealAfter { got: u8, max: u8 },
}

/// Tunables for a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    feedback_window_ms: u32,
    reveal_after: u8,
}

impl PracticeSettings {
    pub const DEFAULT_FEEDBACK_WINDOW_MS: u32 = 1_000;
    pub const MAX_FEEDBACK_WINDOW_MS: u32 = 10_000;
    pub const DEFAULT_REVEAL_AFTER: u8 = 3;
    pub const MAX_REVEAL_AFTER: u8 = 9;

    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidFeedbackWindow` when the window exceeds
    /// `MAX_FEEDBACK_WINDOW_MS`, and `SettingsError::InvalidRevealAfter` when the
    /// reveal threshold is not in `1..=MAX_REVEAL_AFTER`.
    pub fn new(feedback_window_ms: u32, reveal_after: u8) -> Result<Self, SettingsError> {
        if feedback_window_ms > Self::MAX_FEEDBACK_WINDOW_MS {
            return Err(SettingsError::InvalidFeedbackWindow {
                got: feedback_window_ms,
                max: Self::MAX_FEEDBACK_WINDOW_MS,
            });
        }
        if !(1..=Self::MAX_REVEAL_AFTER).contains(&reveal_after) {
            return Err(SettingsError::InvalidRevealAfter {
                got: reveal_after,
                max: Self::MAX_REVEAL_AFTER,
            });
        }
        Ok(Self {
            feedback_window_ms,
            reveal_after,
        })
    }

    /// How long the result banner stays up before the deferred transition runs.
    #[must_use]
    pub fn feedback_window_ms(&self) -> u32 {
        self.feedback_window_ms
    }

    #[must_use]
    pub fn feedback_window(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::from(self.feedback_window_ms))
    }

    #[must_use]
    pub fn feedback_window_std(&self) -> std::time::Duration {
        std::time::Duration::from_millis(u64::from(self.feedback_window_ms))
    }

    /// Number of wrong attempts at one stage before the answer is revealed.
    #[must_use]
    pub fn reveal_after(&self) -> u8 {
        self.reveal_after
    }

    /// Re-checks settings that may have come from deserialization.
    ///
    /// # Errors
    ///
    /// Same as [`PracticeSettings::new`].
    pub fn validated(self) -> Result<Self, SettingsError> {
        Self::new(self.feedback_window_ms, self.reveal_after)
    }
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            feedback_window_ms: Self::DEFAULT_FEEDBACK_WINDOW_MS,
            reveal_after: Self::DEFAULT_REVEAL_AFTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_one_second_and_three_attempts() {
        let settings = PracticeSettings::default();
        assert_eq!(settings.feedback_window_ms(), 1_000);
        assert_eq!(settings.feedback_window(), chrono::Duration::seconds(1));
        assert_eq!(settings.reveal_after(), 3);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            PracticeSettings::new(10_001, 3),
            Err(SettingsError::InvalidFeedbackWindow {
                got: 10_001,
                max: 10_000
            })
        );
        assert_eq!(
            PracticeSettings::new(1_000, 0),
            Err(SettingsError::InvalidRevealAfter { got: 0, max: 9 })
        );
        assert!(PracticeSettings::new(0, 1).is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: PracticeSettings =
            serde_json::from_str(r#"{ "reveal_after": 5 }"#).unwrap();
        assert_eq!(settings.feedback_window_ms(), 1_000);
        assert_eq!(settings.reveal_after(), 5);

        let invalid: PracticeSettings =
            serde_json::from_str(r#"{ "reveal_after": 0 }"#).unwrap();
        assert!(invalid.validated().is_err());
    }
}
