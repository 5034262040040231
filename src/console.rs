//! Line-oriented console front end.
//!
//! Prints the state and the menu, reads one menu code per line, applies it and
//! reports the outcome. Works on any `BufRead`/`Write` pair, so scripted input
//! and piped output behave the same as an interactive terminal.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::core::{PieceSource, Session};
use crate::input::{parse_choice, InputError};
use crate::term::text::{self, MENU_TITLE};

/// Run the session until it is quit or the input ends.
pub fn run<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> Result<()>
where
    S: PieceSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    while !session.is_finished() {
        writeln!(out, "{}", text::format_state(&session.snapshot()))?;
        write_menu(out)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            debug!("console input closed");
            writeln!(out)?;
            break;
        };
        let line = line?;

        let action = match parse_choice(&line) {
            Ok(action) => action,
            Err(InputError::UnknownOption(code)) => {
                debug!(code, "unknown menu option");
                writeln!(out, "Invalid option.")?;
                continue;
            }
            Err(err) => {
                debug!(%err, "unparsable menu input");
                writeln!(out, "Invalid input.")?;
                continue;
            }
        };

        match session.apply_action(action) {
            Ok(event) => writeln!(out, "{}", text::describe_event(&event))?,
            Err(err) => writeln!(out, "{}", text::describe_failure(action, &err))?,
        }
    }
    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    for line in text::menu_lines() {
        writeln!(out, "{line}")?;
    }
    write!(out, "Choice: ")?;
    Ok(())
}
