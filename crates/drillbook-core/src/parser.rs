//! TOML lesson parser.
//!
//! Parses lessons from TOML text and validates them. Lessons are embedded in
//! the binary (see [`crate::content`]); nothing is read from disk at runtime.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::lesson::{Item, Lesson, Prediction, Question, Section};

/// Intermediate TOML structure for parsing lesson files.
#[derive(Debug, Deserialize)]
struct TomlLessonFile {
    lesson: TomlLessonHeader,
    #[serde(default)]
    sections: Vec<TomlSection>,
}

#[derive(Debug, Deserialize)]
struct TomlLessonHeader {
    id: String,
    title: String,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct TomlSection {
    title: String,
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    items: Vec<TomlItem>,
}

/// One raw item. The `kind` field selects which of the optional fields are
/// required; checking that here gives better errors than a serde tag.
#[derive(Debug, Deserialize)]
struct TomlItem {
    kind: String,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Parse TOML text into a [`Lesson`]. `origin` names the source in errors.
pub fn parse_lesson_str(content: &str, origin: &str) -> Result<Lesson> {
    let parsed: TomlLessonFile =
        toml::from_str(content).with_context(|| format!("failed to parse TOML: {origin}"))?;

    let lesson_id = parsed.lesson.id;
    let sections = parsed
        .sections
        .into_iter()
        .map(|s| {
            let section_title = s.title;
            let items = s
                .items
                .into_iter()
                .map(|item| convert_item(item, &lesson_id, &section_title))
                .collect::<Result<Vec<_>>>()?;
            Ok(Section {
                title: section_title,
                notes: s.notes,
                items,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Lesson {
        id: lesson_id,
        title: parsed.lesson.title,
        summary: parsed.lesson.summary,
        sections,
    })
}

fn convert_item(item: TomlItem, lesson_id: &str, section_title: &str) -> Result<Item> {
    match item.kind.as_str() {
        "quiz" => Ok(Item::Quiz(Question {
            prompt: item.prompt.with_context(|| {
                format!("[{lesson_id}/{section_title}] quiz item is missing 'prompt'")
            })?,
            answer: item.answer.with_context(|| {
                format!("[{lesson_id}/{section_title}] quiz item is missing 'answer'")
            })?,
            hint: item.hint,
        })),
        "predict" => Ok(Item::Predict(Prediction {
            code: item.code.with_context(|| {
                format!("[{lesson_id}/{section_title}] predict item is missing 'code'")
            })?,
            output: item.output.with_context(|| {
                format!("[{lesson_id}/{section_title}] predict item is missing 'output'")
            })?,
            explanation: item.explanation.with_context(|| {
                format!("[{lesson_id}/{section_title}] predict item is missing 'explanation'")
            })?,
        })),
        other => {
            anyhow::bail!("[{lesson_id}/{section_title}] unknown item kind: '{other}'")
        }
    }
}

/// A warning from lesson validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The lesson ID (if applicable).
    pub lesson_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a single lesson for common content mistakes.
pub fn validate_lesson(lesson: &Lesson) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |message: String| {
        warnings.push(ValidationWarning {
            lesson_id: Some(lesson.id.clone()),
            message,
        });
    };

    if lesson.question_count() == 0 {
        warn("lesson has no questions".into());
    }

    for section in &lesson.sections {
        for item in &section.items {
            match item {
                Item::Quiz(q) => {
                    if q.prompt.trim().is_empty() {
                        warn(format!("[{}] quiz prompt is empty", section.title));
                    }
                    if q.answer.trim().is_empty() {
                        warn(format!("[{}] quiz answer is empty", section.title));
                    } else if q.answer != q.answer.trim() {
                        // Normalization hides this at runtime; the content
                        // is still misauthored.
                        warn(format!(
                            "[{}] quiz answer '{}' has surrounding whitespace",
                            section.title, q.answer
                        ));
                    }
                }
                Item::Predict(p) => {
                    if p.code.trim().is_empty() {
                        warn(format!("[{}] predict snippet is empty", section.title));
                    }
                    if p.output.trim().is_empty() {
                        warn(format!("[{}] predict output is empty", section.title));
                    }
                    if p.explanation.trim().is_empty() {
                        warn(format!("[{}] predict explanation is empty", section.title));
                    }
                }
            }
        }
    }

    warnings
}

/// Validate a set of lessons: per-lesson checks plus duplicate-id detection.
pub fn validate_lessons(lessons: &[Lesson]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = std::collections::HashSet::new();
    for lesson in lessons {
        if !seen_ids.insert(&lesson.id) {
            warnings.push(ValidationWarning {
                lesson_id: Some(lesson.id.clone()),
                message: format!("duplicate lesson ID: {}", lesson.id),
            });
        }
    }

    for lesson in lessons {
        warnings.extend(validate_lesson(lesson));
    }

    warnings
}
