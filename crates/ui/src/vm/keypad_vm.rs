use squaring_core::model::Digit;

use super::PracticeIntent;

/// One button of the on-screen keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(Digit),
    Clear,
    Backspace,
    Submit,
}

impl KeypadKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            KeypadKey::Digit(digit) => digit.to_string(),
            KeypadKey::Clear => "C".to_string(),
            KeypadKey::Backspace => "⌫".to_string(),
            KeypadKey::Submit => "=".to_string(),
        }
    }

    /// CSS classes; the submit key spans the whole last row.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            KeypadKey::Digit(_) => "keypad-key keypad-key--number",
            KeypadKey::Clear => "keypad-key keypad-key--clear",
            KeypadKey::Backspace => "keypad-key keypad-key--backspace",
            KeypadKey::Submit => "keypad-key keypad-key--enter",
        }
    }

    #[must_use]
    pub fn intent(self) -> PracticeIntent {
        match self {
            KeypadKey::Digit(digit) => PracticeIntent::Digit(digit),
            KeypadKey::Clear => PracticeIntent::Clear,
            KeypadKey::Backspace => PracticeIntent::Backspace,
            KeypadKey::Submit => PracticeIntent::Submit,
        }
    }
}

/// The thirteen keypad buttons in display order:
/// `7 8 9 / 4 5 6 / 1 2 3 / 0 C ⌫ / =`.
#[must_use]
pub fn keypad_layout() -> Vec<KeypadKey> {
    let mut keys = "7894561230"
        .chars()
        .filter_map(|ch| Digit::try_from(ch).ok())
        .map(KeypadKey::Digit)
        .collect::<Vec<_>>();
    keys.extend([KeypadKey::Clear, KeypadKey::Backspace, KeypadKey::Submit]);
    keys
}

/// Maps a typed character from the physical keyboard onto a keypad button.
#[must_use]
pub fn key_for_character(text: &str) -> Option<KeypadKey> {
    let mut chars = text.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match ch {
        '=' => Some(KeypadKey::Submit),
        'c' | 'C' => Some(KeypadKey::Clear),
        _ => Digit::try_from(ch).ok().map(KeypadKey::Digit),
    }
}
