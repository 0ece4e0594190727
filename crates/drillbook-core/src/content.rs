//! Built-in lessons, embedded at compile time.
//!
//! The runtime reads no files: lesson TOML is baked into the binary with
//! `include_str!` and parsed on startup.

use anyhow::{Context, Result};

use crate::lesson::Lesson;
use crate::parser::parse_lesson_str;

/// Embedded lesson sources, in curriculum order.
const LESSON_SOURCES: &[(&str, &str)] = &[
    ("01-variables.toml", include_str!("../lessons/01-variables.toml")),
    ("02-functions.toml", include_str!("../lessons/02-functions.toml")),
    (
        "03-structs-and-traits.toml",
        include_str!("../lessons/03-structs-and-traits.toml"),
    ),
];

/// Parse every built-in lesson, in curriculum order.
pub fn builtin_lessons() -> Result<Vec<Lesson>> {
    LESSON_SOURCES
        .iter()
        .map(|(origin, source)| {
            let lesson = parse_lesson_str(source, origin)
                .with_context(|| format!("built-in lesson {origin} is broken"))?;
            tracing::debug!("parsed built-in lesson '{}' from {origin}", lesson.id);
            Ok(lesson)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_lessons;

    #[test]
    fn builtins_parse() {
        let lessons = builtin_lessons().unwrap();
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons[0].id, "variables");
        assert_eq!(lessons[1].id, "functions");
        assert_eq!(lessons[2].id, "structs");
    }

    #[test]
    fn builtins_validate_clean() {
        let lessons = builtin_lessons().unwrap();
        let warnings = validate_lessons(&lessons);
        assert!(
            warnings.is_empty(),
            "built-in lessons should validate clean: {:?}",
            warnings
                .iter()
                .map(|w| &w.message)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn builtins_have_unique_ids() {
        let lessons = builtin_lessons().unwrap();
        let mut ids: Vec<_> = lessons.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), lessons.len());
    }

    #[test]
    fn builtins_each_ask_something() {
        for lesson in builtin_lessons().unwrap() {
            assert!(
                lesson.question_count() > 0,
                "lesson '{}' asks nothing",
                lesson.id
            );
        }
    }
}
