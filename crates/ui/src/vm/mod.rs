mod keypad_vm;
mod practice_vm;

pub use keypad_vm::{KeypadKey, key_for_character, keypad_layout};
pub use practice_vm::{
    BannerVm, DisplayVm, INVALID_NUMBER_HINT, PracticeIntent, PracticeVm, SlotVm, SumBoxVm,
};
