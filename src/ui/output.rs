//! Console output for the payload program.
//!
//! This module writes every line the program shows on standard output:
//! - The greeting banner and argument header
//! - One echo line per argument
//! - The exit prompt and the final exit message
//!
//! All functions take a generic writer so they can be pointed at a buffer.

use std::{
    ffi::OsStr,
    io::{self, Write},
};

const GREETING: &str = "Hello from Test JAR!";
const DESCRIPTION: &str = "This is a test JAR file for JAR Launcher.";
const ARGUMENTS_HEADER: &str = "Command line arguments:";
const EXIT_PROMPT: &str = "Press Enter to exit...";
const EXIT_MESSAGE: &str = "Exiting...";

/// Formats a single echo line.
///
/// # Arguments
/// * `index` - 1-based position of the argument
/// * `argument` - The argument as received; invalid UTF-8 is replaced
///
/// # Examples
/// ```text
/// echo_line(1, "alpha") => "  1: alpha"
/// ```
pub fn echo_line(index: usize, argument: &OsStr) -> String {
    format!("  {}: {}", index, argument.to_string_lossy())
}

/// Prints the greeting, the description line and the argument header.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)?;
    writeln!(out, "{}", DESCRIPTION)?;
    writeln!(out, "{}", ARGUMENTS_HEADER)
}

/// Prints one echo line per argument, in the order given.
///
/// # Arguments
/// * `out` - Destination writer
/// * `arguments` - The arguments to echo, without the program name
pub fn print_arguments<W, A>(out: &mut W, arguments: &[A]) -> io::Result<()>
where
    W: Write,
    A: AsRef<OsStr>,
{
    for (i, argument) in arguments.iter().enumerate() {
        writeln!(out, "{}", echo_line(i + 1, argument.as_ref()))?;
    }

    Ok(())
}

/// Prints a blank line and the exit prompt, then flushes.
///
/// The flush matters: the caller blocks on standard input right after.
pub fn print_exit_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", EXIT_PROMPT)?;
    out.flush()
}

pub fn print_exit_message<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", EXIT_MESSAGE)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_lines() {
        let text = render(|out| print_banner(out));
        assert_eq!(
            text,
            "Hello from Test JAR!\nThis is a test JAR file for JAR Launcher.\nCommand line arguments:\n"
        );
    }

    #[test]
    fn test_echo_line_format() {
        assert_eq!(echo_line(1, OsStr::new("alpha")), "  1: alpha");
        assert_eq!(echo_line(12, OsStr::new("")), "  12: ");
        assert_eq!(echo_line(3, OsStr::new("two words")), "  3: two words");
    }

    #[test]
    fn test_arguments_keep_their_order() {
        let args = ["zeta", "alpha", "zeta"];
        let text = render(|out| print_arguments(out, &args));
        assert_eq!(text, "  1: zeta\n  2: alpha\n  3: zeta\n");
    }

    #[test]
    fn test_no_arguments_prints_nothing() {
        let args: [&str; 0] = [];
        let text = render(|out| print_arguments(out, &args));
        assert!(text.is_empty());
    }

    #[test]
    fn test_prompt_starts_with_blank_line() {
        let text = render(|out| print_exit_prompt(out));
        assert_eq!(text, "\nPress Enter to exit...\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_replaced() {
        use std::os::unix::ffi::OsStrExt;

        let arg = OsStr::from_bytes(b"ab\xffcd");
        assert_eq!(echo_line(1, arg), "  1: ab\u{FFFD}cd");
    }
}
