//! Line-oriented prompting over any reader/writer pair
//!
//! Keeps the command loop independent from the real terminal so it can be
//! driven by scripted input.

use crate::error::{Result, ShelterError};
use std::io::{BufRead, Write};
use tracing::debug;

/// Writes prompts and messages, reads answers one line at a time
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    show_prompts: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter; with `show_prompts` off, questions are asked silently
    pub const fn new(input: R, output: W, show_prompts: bool) -> Self {
        Self {
            input,
            output,
            show_prompts,
        }
    }

    /// Print `prompt` and read one line, without its line terminator
    ///
    /// End of input is reported as [`ShelterError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        if self.show_prompts {
            write!(self.output, "{prompt}")
                .and_then(|()| self.output.flush())
                .map_err(|e| ShelterError::io("write prompt", e))?;
        }

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| ShelterError::io("read input", e))?;

        if read == 0 {
            return Err(ShelterError::InputClosed);
        }

        // Operator text is not trusted to be UTF-8
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask for a fee until the answer is a finite number
    pub fn ask_fee(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_fee(&answer) {
                Some(fee) => return Ok(fee),
                None => debug!("Rejected fee input {:?}, asking again", answer),
            }
        }
    }

    /// Print a full line of output
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| ShelterError::io("write output", e))
    }
}

/// Parse a fee answer; blank, non-numeric, NaN and infinite inputs yield `None`
///
/// Only decimal notation is accepted; hex such as `0x10` asks again.
/// Sign is not checked here. Negative fees parse and are rejected by the store.
pub fn parse_fee(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    input.parse::<f64>().ok().filter(|fee| fee.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_fee_accepts_numbers() {
        assert_eq!(parse_fee("50"), Some(50.0));
        assert_eq!(parse_fee(" 12.5 "), Some(12.5));
        assert_eq!(parse_fee("0"), Some(0.0));
        assert_eq!(parse_fee("-3"), Some(-3.0));
        assert_eq!(parse_fee("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_fee_rejects_garbage() {
        for input in ["", "   ", "ten", "$50", "NaN", "inf", "-infinity", "5 dollars"] {
            assert_eq!(parse_fee(input), None, "input {input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_fee_is_decimal_only() {
        assert_eq!(parse_fee("0x10"), None);
        assert_eq!(parse_fee("0b101"), None);
        assert_eq!(parse_fee("016"), Some(16.0));
    }

    #[test]
    fn test_ask_replaces_invalid_utf8() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(&b"Caf\xe9\r\n"[..]), &mut output, true);
        assert_eq!(prompter.ask("Name: ").unwrap(), "Caf\u{FFFD}");
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("Buddy\r\nRex\n"), &mut output, true);

        assert_eq!(prompter.ask("Name: ").unwrap(), "Buddy");
        assert_eq!(prompter.ask("Name: ").unwrap(), "Rex");
        drop(prompter);

        assert_eq!(String::from_utf8(output).unwrap(), "Name: Name: ");
    }

    #[test]
    fn test_ask_keeps_inner_whitespace() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("  Mr Whiskers \n"), &mut output, true);
        assert_eq!(prompter.ask("Name: ").unwrap(), "  Mr Whiskers ");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(""), &mut output, true);
        assert!(matches!(
            prompter.ask("Name: "),
            Err(ShelterError::InputClosed)
        ));
    }

    #[test]
    fn test_ask_fee_reprompts_until_numeric() {
        let mut output = Vec::new();
        let mut prompter =
            Prompter::new(Cursor::new("abc\n\nNaN\n42\n"), &mut output, true);

        assert_eq!(prompter.ask_fee("Fee: ").unwrap(), 42.0);
        drop(prompter);

        assert_eq!(String::from_utf8(output).unwrap(), "Fee: ".repeat(4));
    }

    #[test]
    fn test_ask_fee_fails_when_input_runs_out() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("abc\n"), &mut output, true);
        assert!(matches!(
            prompter.ask_fee("Fee: "),
            Err(ShelterError::InputClosed)
        ));
    }

    #[test]
    fn test_silent_prompts() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("add\n"), &mut output, false);

        assert_eq!(prompter.ask("Action: ").unwrap(), "add");
        prompter.say("done").unwrap();
        drop(prompter);

        assert_eq!(String::from_utf8(output).unwrap(), "done\n");
    }
}
