//! Command-line argument collection.
//!
//! Nothing here parses flags: `--help`, `--` and friends are plain tokens
//! that belong in the echo list like any other argument.

use std::{env, ffi::OsString};

/// Returns the process arguments without the program name, in order.
///
/// Tokens stay as `OsString` so that arguments which are not valid UTF-8
/// are still echoed (lossily) instead of aborting the program.
pub fn collect_arguments() -> Vec<OsString> {
    env::args_os().skip(1).collect()
}
