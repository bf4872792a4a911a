//! The program's entry routine: banner, argument echo, keypress wait, exit.

use crate::error::Result;
use crate::input::{KeypressOutcome, wait_for_keypress};
use crate::ui::output::{print_arguments, print_banner, print_exit_message, print_exit_prompt};
use std::{
    ffi::OsStr,
    io::{Read, Write},
};
use tracing::debug;

/// Runs the whole program against the given streams.
///
/// A failed keypress read is reported on `diag` and swallowed, so the only
/// error this returns is a failure to write `out`.
///
/// # Arguments
/// * `arguments` - Process arguments without the program name
/// * `input` - Where the keypress is read from
/// * `out` - Where every visible line is written
/// * `diag` - Where the read failure diagnostic goes
///
/// # Returns
/// The keypress outcome, or `None` when the read failed.
pub fn run<A, R, W, E>(
    arguments: &[A],
    input: &mut R,
    out: &mut W,
    diag: &mut E,
) -> Result<Option<KeypressOutcome>>
where
    A: AsRef<OsStr>,
    R: Read,
    W: Write,
    E: Write,
{
    debug!(count = arguments.len(), "echoing command line arguments");

    print_banner(out)?;
    print_arguments(out, arguments)?;
    print_exit_prompt(out)?;

    let keypress = match wait_for_keypress(input) {
        Ok(outcome) => {
            debug!(?outcome, "keypress wait finished");
            Some(outcome)
        }
        Err(e) => {
            debug!(error = %e, "keypress wait failed, continuing");
            // Nowhere left to report to if stderr is gone too.
            let _ = writeln!(diag, "{}", e);
            None
        }
    };

    print_exit_message(out)?;
    debug!("done");

    Ok(keypress)
}
