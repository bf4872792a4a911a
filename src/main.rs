mod entry;
mod error;
mod input;
mod logging;
mod ui;

use anyhow::Context;
use logging::init_logging;
use std::io;
use ui::cli::collect_arguments;

/// Runs the payload against the process's standard streams.
///
/// Always exits with success: a failed keypress read is reported by the
/// entry routine, and a failed stdout write is logged at error level.
fn main() {
    init_logging();

    let arguments = collect_arguments();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = entry::run(
        &arguments[..],
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("payload output was cut short");

    if let Err(e) = result {
        tracing::error!("{:#}", e);
    }
}
