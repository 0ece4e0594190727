//! Core data model types for drillbook.
//!
//! These are the fundamental types the entire system uses to represent
//! lessons, sections, and the interactive items inside them.

use serde::{Deserialize, Serialize};

/// One lesson's worth of content: an ordered sequence of sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier for this lesson (e.g. "variables").
    pub id: String,
    /// Human-readable title shown in the lesson banner.
    pub title: String,
    /// Short description shown under the banner and in `drillbook list`.
    #[serde(default)]
    pub summary: String,
    /// The sections in this lesson, run in textual order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Lesson {
    /// Total number of scored items (quizzes and predictions) in the lesson.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// A banner-delimited block of prose followed by interactive items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading.
    pub title: String,
    /// Prose lines printed before the items.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Scored items, asked in order.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A single scored item. Both variants share the same scoring contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Quiz(Question),
    Predict(Prediction),
}

/// A direct question with an expected answer and an optional hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub prompt: String,
    /// The expected answer, matched per [`answers_match`].
    pub answer: String,
    /// Shown after a miss, if present.
    #[serde(default)]
    pub hint: Option<String>,
}

impl Question {
    /// Whether `reply` counts as a correct answer to this question.
    pub fn accepts(&self, reply: &str) -> bool {
        answers_match(&self.answer, reply)
    }
}

/// A "predict this code's output" exercise. Unlike a quiz hint, the
/// explanation is mandatory and always shown on a miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The code snippet shown to the user.
    pub code: String,
    /// The output the snippet prints.
    pub output: String,
    /// Why the snippet prints that output.
    pub explanation: String,
}

impl Prediction {
    /// Whether `reply` counts as a correct prediction.
    pub fn accepts(&self, reply: &str) -> bool {
        answers_match(&self.output, reply)
    }
}

/// The one comparison policy: case-insensitive, whitespace-trimmed exact
/// equality. No fuzzy matching, no synonyms.
pub fn answers_match(expected: &str, given: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
