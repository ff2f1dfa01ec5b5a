//! Line-oriented session: one action per line, applied to the displayed grid.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::warn;

use crate::session::{Action, Session};

const HELP: &str = "\
Actions:
  process (p)        run every visitor over the displayed windows
  status (s)         count windows by status
  winners (w)        open windows whose neighbors are closed
  open (o)           every fully open window
  reset (r)          back to the starting row
  show               print the displayed windows
  help               this list
  quit (q)           leave";

const PROMPT: &str = "> ";

/// Reads actions from `input` until end of input or `quit`.
///
/// # Errors
/// - I/O errors reading `input` or writing `output`
/// - Errors from the session
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "{}", session.perform(Action::Show)?)?;
    writeln!(output, "{HELP}")?;
    prompt(output)?;

    for line in input.lines() {
        let line = line.context("failed to read action")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" | "q" => break,
            "help" | "?" => writeln!(output, "{HELP}")?,
            command => match command.parse::<Action>() {
                Ok(action) => writeln!(output, "{}", session.perform(action)?)?,
                Err(message) => {
                    warn!(command, "Unrecognized action");
                    writeln!(output, "{message}")?;
                }
            },
        }
        prompt(output)?;
    }

    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> anyhow::Result<()> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    Ok(())
}
