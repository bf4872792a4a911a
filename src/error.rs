//! Error type for the payload program.

use std::io;
use thiserror::Error;

/// Result type alias using PayloadError
pub type Result<T> = std::result::Result<T, PayloadError>;

#[derive(Debug, Error)]
pub enum PayloadError {
    /// Reading the keypress from standard input failed. Never fatal.
    #[error("failed to read from standard input: {0}")]
    Input(#[source] io::Error),

    /// Writing to standard output failed, usually a closed pipe.
    #[error("failed to write to standard output")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_cause_appears_once_in_chain() {
        let err = PayloadError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe gone"));
        assert_eq!(err.to_string(), "failed to write to standard output");

        let chain = format!("{:#}", anyhow::Error::new(err).context("output cut short"));
        assert_eq!(
            chain,
            "output cut short: failed to write to standard output: pipe gone"
        );
    }

    #[test]
    fn test_input_message_carries_cause() {
        let err = PayloadError::Input(io::Error::other("no tty"));
        assert_eq!(err.to_string(), "failed to read from standard input: no tty");
    }
}
