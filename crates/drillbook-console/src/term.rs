//! The real terminal console: stdin for answers, stdout for everything else.

use std::io::{self, BufRead, IsTerminal, Write};

use drillbook_core::console::{Console, Tone};
use drillbook_core::error::ConsoleError;

use crate::style::paint;

/// Console backed by the process's stdin and stdout.
pub struct TermConsole {
    color: bool,
}

impl TermConsole {
    /// `color` controls whether tones are rendered with ANSI escapes.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color on only when stdout is an attached terminal.
    pub fn auto() -> Self {
        Self::new(io::stdout().is_terminal())
    }
}

impl Console for TermConsole {
    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", paint(tone, text, self.color))?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut out = io::stdout().lock();
        write!(out, "{}", paint(Tone::Heading, prompt, self.color))?;
        out.flush()?;
        drop(out);

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        // Drop the line terminator; trimming of the answer itself is the
        // runner's job.
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}
