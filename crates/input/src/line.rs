//! Menu line parsing for the console front end.

use thiserror::Error;

use crate::types::SupplyAction;

/// Why a typed line is not a menu command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("invalid input: {0:?} is not a number")]
    NotANumber(String),

    #[error("invalid option: {0}")]
    UnknownOption(i64),
}

/// Parse one typed line into a menu command.
///
/// Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```
/// use tetris_stack_input::{parse_choice, InputError};
/// use tetris_stack_types::SupplyAction;
///
/// assert_eq!(parse_choice(" 3\n"), Ok(SupplyAction::Reserve));
/// assert_eq!(parse_choice("7"), Err(InputError::UnknownOption(7)));
/// ```
pub fn parse_choice(line: &str) -> Result<SupplyAction, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let code: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    u8::try_from(code)
        .ok()
        .and_then(SupplyAction::from_code)
        .ok_or(InputError::UnknownOption(code))
}
