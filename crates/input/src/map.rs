//! Key mapping from terminal events to supply actions.

use crate::types::SupplyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to supply actions.
///
/// Menu digits work as in the console; letters are mnemonics for the same commands.
pub fn handle_key_event(key: KeyEvent) -> Option<SupplyAction> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let code = c.to_digit(10)? as u8;
            SupplyAction::from_code(code)
        }

        // Queue
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(SupplyAction::Play),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(SupplyAction::Insert),

        // Reserve
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SupplyAction::Reserve),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(SupplyAction::UseReserved),

        // Swaps
        KeyCode::Char('s') | KeyCode::Char('S') => Some(SupplyAction::SwapFront),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(SupplyAction::SwapThree),

        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
