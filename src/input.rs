//! The single blocking read performed before the program exits.

use crate::error::{PayloadError, Result};
use std::io::Read;

/// What the keypress read produced. The byte itself is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressOutcome {
    Byte,
    EndOfInput,
}

/// Blocks until one byte is available on `reader` or the stream ends.
///
/// Exactly one `read` call is made. Any error, including
/// `ErrorKind::Interrupted`, is returned as `PayloadError::Input` for the
/// caller to report.
pub fn wait_for_keypress<R: Read>(reader: &mut R) -> Result<KeypressOutcome> {
    let mut buf = [0u8; 1];
    match reader.read(&mut buf) {
        Ok(0) => Ok(KeypressOutcome::EndOfInput),
        Ok(_) => Ok(KeypressOutcome::Byte),
        Err(e) => Err(PayloadError::Input(e)),
    }
}
