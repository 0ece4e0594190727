//! Error types for console I/O and session scoring.
//!
//! Defined here so the engine can classify failures without string matching:
//! console errors abort a run, a `SessionError` only ever means the caller
//! computed a percentage before asking anything.

use thiserror::Error;

/// Errors raised by a [`Console`](crate::console::Console) implementation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input stream reached end-of-file while a question was waiting
    /// for an answer. There is no recovery; the run is over.
    #[error("input stream closed")]
    Closed,

    /// An underlying read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`Session`](crate::session::Session) accounting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A percentage was requested before any question was asked.
    #[error("no questions were asked")]
    NoQuestionsAsked,
}

/// Any failure that can end a lesson run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
