//! # Menu
//!
//! The numbered menu shown before every choice.

use staterec_core::StateError;

/// Menu text, printed verbatim before the choice prompt.
pub const MENU_TEXT: &str = "\nMenu:\n\
1. Create base record\n\
2. Create extended record\n\
3. Delete record\n\
4. Show all records\n\
5. Exit\n";

pub const CHOICE_PROMPT: &str = "Choose an option: ";
pub const ID_PROMPT: &str = "Enter ID: ";
pub const STATE_PROMPT: &str = "Enter state: ";
pub const SECONDARY_STATE_PROMPT: &str = "Enter additional state: ";
pub const DELETE_ID_PROMPT: &str = "Enter ID to delete: ";
pub const EXIT_MESSAGE: &str = "Exiting program...";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateBase,
    CreateExtended,
    Delete,
    ShowAll,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = StateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::CreateBase),
            2 => Ok(Self::CreateExtended),
            3 => Ok(Self::Delete),
            4 => Ok(Self::ShowAll),
            5 => Ok(Self::Exit),
            other => Err(StateError::InvalidMenuChoice(other)),
        }
    }
}
