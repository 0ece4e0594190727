//! Session counters and percentage scoring.
//!
//! A [`Session`] is created once at program start, mutated by every scored
//! item, and discarded on exit. Nothing is persisted.

use crate::error::SessionError;

/// Result of one scored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Missed,
}

/// In-process quiz counters. Invariant: `0 <= score <= total`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    score: u32,
    total: u32,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions answered correctly.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions asked.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Record that a question is being asked. Called before the answer is
    /// read, so an aborted read still counts as asked.
    pub fn begin_question(&mut self) {
        self.total += 1;
    }

    /// Record a correct answer to the question most recently begun.
    pub fn mark_correct(&mut self) {
        debug_assert!(self.score < self.total, "mark_correct without begin_question");
        self.score += 1;
    }

    /// Final score as `round(100 * score / total)`, always in `[0, 100]`.
    ///
    /// Callers must have asked at least one question; with `total == 0`
    /// this returns [`SessionError::NoQuestionsAsked`] instead of dividing
    /// by zero.
    pub fn percentage(&self) -> Result<u8, SessionError> {
        if self.total == 0 {
            return Err(SessionError::NoQuestionsAsked);
        }
        Ok(((self.score as f64 / self.total as f64) * 100.0).round() as u8)
    }

    /// Grade band for the final percentage.
    pub fn grade(&self) -> Result<Grade, SessionError> {
        Ok(Grade::for_percentage(self.percentage()?))
    }
}

/// Band for a final percentage, with a closing message per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Strong,
    Fair,
    NeedsReview,
}

impl Grade {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            100 => Grade::Perfect,
            80..=99 => Grade::Strong,
            60..=79 => Grade::Fair,
            _ => Grade::NeedsReview,
        }
    }

    /// The closing line printed with the final score.
    pub fn message(&self) -> &'static str {
        match self {
            Grade::Perfect => "PERFECT SCORE! Every answer correct.",
            Grade::Strong => "Great job! You have a strong grasp of this material.",
            Grade::Fair => "Good effort! Review the sections you missed and run it again.",
            Grade::NeedsReview => {
                "No worries! Re-read the lessons and try again. Repetition builds memory."
            }
        }
    }
}
