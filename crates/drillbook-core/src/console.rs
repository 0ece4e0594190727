//! The console trait — the seam between scoring logic and terminal I/O.
//!
//! The engine only ever talks to a `dyn Console`, so it can be unit-tested
//! against a scripted implementation with no terminal attached. The real
//! terminal console lives in the `drillbook-console` crate.

use crate::error::ConsoleError;

/// Semantic category of an output line. Implementations decide how (or
/// whether) to render each tone; the codes are cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary prose.
    Plain,
    /// Section banners and prompts.
    Heading,
    /// Positive feedback.
    Good,
    /// Negative feedback.
    Bad,
    /// Hints and explanations.
    Hint,
    /// Code snippets.
    Code,
}

/// Minimal line-oriented read/write interface.
pub trait Console {
    /// Emit one line of output.
    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError>;

    /// Print `prompt` (no trailing newline), then block until a full line of
    /// input is available and return it without the line terminator.
    ///
    /// There is no timeout; a human is assumed to eventually respond. If the
    /// input stream closes instead, this returns [`ConsoleError::Closed`].
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;
}
