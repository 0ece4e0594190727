//! The `drillbook list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use drillbook_core::content::builtin_lessons;

pub fn execute() -> Result<()> {
    let lessons = builtin_lessons()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Sections", "Questions"]);

    for lesson in &lessons {
        table.add_row(vec![
            Cell::new(&lesson.id),
            Cell::new(&lesson.title),
            Cell::new(lesson.sections.len()),
            Cell::new(lesson.question_count()),
        ]);
    }

    println!("{table}");
    println!("\nRun one with: drillbook run --lesson <id>");

    Ok(())
}
