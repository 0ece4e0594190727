//! Scripted console for testing the engine without a terminal.

use std::collections::VecDeque;

use drillbook_core::console::{Console, Tone};
use drillbook_core::error::ConsoleError;

/// A console that answers prompts from a fixed script and records
/// everything written to it.
///
/// When the script runs out, `read_line` reports the input stream as
/// closed, which is exactly what piped stdin does at end-of-file.
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    transcript: Vec<(Tone, String)>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Everything written so far, in order.
    pub fn transcript(&self) -> &[(Tone, String)] {
        &self.transcript
    }

    /// The written lines joined with newlines, for `contains` assertions.
    pub fn output(&self) -> String {
        self.transcript
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every prompt passed to `read_line`, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Scripted replies not yet consumed.
    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push((tone, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompts.push(prompt.to_string());
        self.replies.pop_front().ok_or(ConsoleError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_come_back_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), "second");
        assert_eq!(console.prompts().len(), 2);
    }

    #[test]
    fn exhausted_script_reads_as_closed_stream() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(matches!(
            console.read_line("> "),
            Err(ConsoleError::Closed)
        ));
    }

    #[test]
    fn transcript_records_tone_and_text() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.write(Tone::Good, "  CORRECT!").unwrap();
        console.write(Tone::Plain, "").unwrap();
        assert_eq!(console.transcript().len(), 2);
        assert_eq!(console.transcript()[0], (Tone::Good, "  CORRECT!".into()));
        assert!(console.output().contains("CORRECT!"));
    }
}
