//! The `drillbook run` command.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use drillbook_console::TermConsole;
use drillbook_core::content::builtin_lessons;
use drillbook_core::engine::{LessonOutcome, Runner};
use drillbook_core::lesson::Lesson;
use drillbook_core::session::Session;

pub fn execute(lesson_filter: Option<String>, no_color: bool, no_pause: bool) -> Result<()> {
    let lessons = builtin_lessons()?;
    let selected = select_lessons(lessons, lesson_filter.as_deref())?;

    tracing::debug!("running {} lesson(s)", selected.len());

    let color = !no_color && std::io::stdout().is_terminal();
    let mut console = TermConsole::new(color);
    let mut runner = Runner::new(&mut console);
    if no_pause {
        runner = runner.without_pauses();
    }

    let start = Instant::now();
    let mut outcomes = Vec::new();
    for lesson in &selected {
        let outcome = runner
            .run_lesson(lesson)
            .with_context(|| format!("lesson '{}' aborted", lesson.id))?;
        outcomes.push(outcome);
    }

    runner.finish().context("could not compute the final score")?;

    print_summary(&outcomes, runner.session(), start.elapsed());
    Ok(())
}

/// Resolve a comma-separated id filter against the built-in lessons,
/// preserving the order the ids were given in. `None` selects everything.
fn select_lessons(lessons: Vec<Lesson>, filter: Option<&str>) -> Result<Vec<Lesson>> {
    let Some(filter) = filter else {
        return Ok(lessons);
    };

    let mut selected = Vec::new();
    for id in filter.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let lesson = lessons
            .iter()
            .find(|l| l.id == id)
            .with_context(|| {
                format!(
                    "unknown lesson '{}'. Available: {}",
                    id,
                    lessons
                        .iter()
                        .map(|l| l.id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
        selected.push(lesson.clone());
    }
    anyhow::ensure!(!selected.is_empty(), "no lessons selected");
    Ok(selected)
}

fn print_summary(outcomes: &[LessonOutcome], session: &Session, elapsed: Duration) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Lesson", "Correct", "Asked", "Score"]);

    for outcome in outcomes {
        let score = match outcome.percentage() {
            Some(p) => format!("{p}%"),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&outcome.lesson_id),
            Cell::new(outcome.correct),
            Cell::new(outcome.asked),
            Cell::new(score),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "Complete: {}/{} correct ({:.1}s)",
        session.score(),
        session.total(),
        elapsed.as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: id.to_uppercase(),
            summary: String::new(),
            sections: vec![],
        }
    }

    #[test]
    fn no_filter_selects_everything_in_order() {
        let all = vec![lesson("a"), lesson("b")];
        let selected = select_lessons(all, None).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "a");
    }

    #[test]
    fn filter_preserves_requested_order() {
        let all = vec![lesson("a"), lesson("b"), lesson("c")];
        let selected = select_lessons(all, Some("c, a")).unwrap();
        let ids: Vec<_> = selected.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn unknown_id_lists_what_is_available() {
        let all = vec![lesson("a"), lesson("b")];
        let err = select_lessons(all, Some("zzz")).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("unknown lesson 'zzz'"));
        assert!(msg.contains("a, b"));
    }

    #[test]
    fn empty_filter_is_an_error() {
        let all = vec![lesson("a")];
        assert!(select_lessons(all, Some(" , ")).is_err());
    }
}
