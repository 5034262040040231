//! Plain-text formatting of the supply state and session messages.
//!
//! Used by the line-oriented console and by the status line of [`crate::SupplyView`].

use crate::core::{SupplyError, SupplyEvent, SupplySnapshot};
use crate::types::{Piece, SupplyAction};

const RULE: &str = "-------------------------------------------------";

pub const MENU_TITLE: &str = "=== TETRIS STACK ===";

fn join_pieces<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let parts: Vec<String> = pieces.map(Piece::to_string).collect();
    if parts.is_empty() {
        "(empty)".to_string()
    } else {
        parts.join(" ")
    }
}

/// `Upcoming (n/cap): [I 0] [O 1] ...`, head first.
pub fn format_queue(snap: &SupplySnapshot) -> String {
    format!(
        "Upcoming ({}/{}): {}",
        snap.upcoming.len(),
        snap.queue_capacity,
        join_pieces(snap.upcoming.iter())
    )
}

/// `Reserve (n/cap): [T 4] ...`, top first.
pub fn format_reserve(snap: &SupplySnapshot) -> String {
    format!(
        "Reserve ({}/{}): {}",
        snap.reserved.len(),
        snap.reserve_capacity,
        join_pieces(snap.reserved.iter())
    )
}

/// Queue and reserve between two rules.
pub fn format_state(snap: &SupplySnapshot) -> String {
    format!(
        "{RULE}\n{}\n{}\n{RULE}",
        format_queue(snap),
        format_reserve(snap)
    )
}

/// One `code - label` line per menu entry, in menu order.
pub fn menu_lines() -> impl Iterator<Item = String> {
    SupplyAction::ALL
        .into_iter()
        .map(|action| format!("{} - {}", action.code(), action.label()))
}

pub fn describe_event(event: &SupplyEvent) -> String {
    match event {
        SupplyEvent::Played { piece, refilled } => refill_note(format!("Played {piece}."), *refilled),
        SupplyEvent::Inserted(piece) => format!("Inserted {piece}."),
        SupplyEvent::Reserved { piece, refilled } => {
            refill_note(format!("Reserved {piece}."), *refilled)
        }
        SupplyEvent::UsedReserved(piece) => format!("Used reserved {piece}."),
        SupplyEvent::SwappedFront => "Swapped queue front with reserve top.".to_string(),
        SupplyEvent::SwappedThree => "Swapped 3 queued pieces with the 3 reserved.".to_string(),
        SupplyEvent::Shown => "State shown.".to_string(),
        SupplyEvent::Quit => "Leaving. See you next round!".to_string(),
    }
}

fn refill_note(mut msg: String, refilled: bool) -> String {
    if refilled {
        msg.push_str(" Queue refilled.");
    }
    msg
}

pub fn describe_failure(action: SupplyAction, err: &SupplyError) -> String {
    let verb = match action {
        SupplyAction::Play => "play",
        SupplyAction::Insert => "insert",
        SupplyAction::Reserve => "reserve",
        SupplyAction::UseReserved => "use a reserved piece",
        SupplyAction::SwapFront | SupplyAction::SwapThree => "swap",
        SupplyAction::Show => "show",
        SupplyAction::Quit => "quit",
    };
    format!("Cannot {verb}: {err}.")
}
