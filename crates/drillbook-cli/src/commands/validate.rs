//! The `drillbook validate` command.

use anyhow::Result;

use drillbook_core::content::builtin_lessons;
use drillbook_core::parser::validate_lessons;

pub fn execute() -> Result<()> {
    let lessons = builtin_lessons()?;

    for lesson in &lessons {
        println!(
            "Lesson: {} ({} questions)",
            lesson.title,
            lesson.question_count()
        );
    }

    let warnings = validate_lessons(&lessons);
    for w in &warnings {
        let prefix = w
            .lesson_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All lessons valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
