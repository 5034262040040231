//! Tetris Stack runner (default binary).
//!
//! By default the supply is shown in a raw-mode terminal view driven by
//! single key presses. `--plain` switches to the line-oriented console, which
//! also works with piped input.
//!
//! # Usage
//!
//! ```bash
//! tetris-stack                      # terminal view, time-based seed
//! tetris-stack --seed 42 --plain    # numbered menu on stdin/stdout
//! TETRIS_STACK_LOG=debug tetris-stack --log-file stack.log
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tetris_stack::console;
use tetris_stack::core::{Session, SessionConfig, SupplySnapshot};
use tetris_stack::input::{handle_key_event, should_quit};
use tetris_stack::term::{
    describe_event, describe_failure, FrameBuffer, SupplyView, TerminalRenderer, Viewport,
};
use tetris_stack::types::SupplyAction;

/// Piece queue and reserve stack simulator
#[derive(Parser, Debug)]
#[command(name = "tetris-stack")]
#[command(about = "Console simulator for a Tetris piece queue with a reserve stack")]
#[command(version)]
struct Args {
    /// RNG seed for piece generation (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Use the line-oriented console instead of the terminal view
    #[arg(long)]
    plain: bool,

    /// Do not refill the queue after playing or reserving a piece
    #[arg(long)]
    no_refill: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter used when TETRIS_STACK_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

const LOG_ENV: &str = "TETRIS_STACK_LOG";

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = SessionConfig {
        seed: args.seed.unwrap_or_else(time_seed),
        auto_refill: !args.no_refill,
    };
    let mut session = Session::new(config);

    if args.plain {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return console::run(&mut session, stdin.lock(), &mut stdout);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install the global subscriber.
///
/// The terminal view owns the screen, so without a log file it runs silent.
fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .with_context(|| format!("invalid log filter {:?}", args.log_level))?;

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(filter)
            .init();
    } else if args.plain {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
    }
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = SupplyView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SupplySnapshot::empty();
    let mut status = String::from("Press a menu number, or q to quit.");

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, &status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if session.is_finished() {
            return Ok(());
        }

        // Block until the next key; there is nothing to animate.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = if should_quit(key) {
                    Some(SupplyAction::Quit)
                } else {
                    handle_key_event(key)
                };
                let Some(action) = action else {
                    status = String::from("Invalid option.");
                    continue;
                };
                status = match session.apply_action(action) {
                    Ok(event) => describe_event(&event),
                    Err(err) => describe_failure(action, &err),
                };
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
