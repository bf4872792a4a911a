//! Everything the payload shows or takes from the terminal.
//!
//! `cli` hands over the raw argument tokens, `output` owns the fixed lines.

pub mod cli;
pub mod output;
