//! The lesson runner.
//!
//! Drives lessons one item at a time through a blocking console: write the
//! prompt, wait for a line, score it, print feedback. Strictly sequential;
//! ordering is the textual order of the lesson content.

use crate::console::{Console, Tone};
use crate::error::{ConsoleError, RunError};
use crate::lesson::{Item, Lesson, Prediction, Question, Section};
use crate::session::{Grade, Outcome, Session};

const RULE: &str =
    "============================================================";

/// Per-lesson score deltas, for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct LessonOutcome {
    pub lesson_id: String,
    pub title: String,
    /// Questions asked while running this lesson.
    pub asked: u32,
    /// Questions answered correctly while running this lesson.
    pub correct: u32,
}

impl LessonOutcome {
    /// Rounded percentage for this lesson, or `None` if it asked nothing.
    pub fn percentage(&self) -> Option<u8> {
        if self.asked == 0 {
            return None;
        }
        Some(((self.correct as f64 / self.asked as f64) * 100.0).round() as u8)
    }
}

/// Drives questions through a console and tallies one process-wide session.
pub struct Runner<'a> {
    console: &'a mut dyn Console,
    session: Session,
    pauses: bool,
}

impl<'a> Runner<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self {
            console,
            session: Session::new(),
            pauses: true,
        }
    }

    /// Skip the "Press Enter to continue" gates. Useful for piped input.
    pub fn without_pauses(mut self) -> Self {
        self.pauses = false;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Write `prompt`, block for a line of input, and return it trimmed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let reply = self.console.read_line(prompt)?;
        Ok(reply.trim().to_string())
    }

    /// Ask a direct question and score the reply.
    pub fn quiz(&mut self, question: &Question) -> Result<Outcome, ConsoleError> {
        self.console.write(Tone::Plain, "")?;
        self.session.begin_question();

        let reply = self.ask(&format!("  QUIZ: {}\n  > ", question.prompt))?;
        if question.accepts(&reply) {
            self.session.mark_correct();
            self.console.write(Tone::Good, "  CORRECT!")?;
            return Ok(Outcome::Correct);
        }

        self.console.write(
            Tone::Bad,
            &format!("  Not quite. The answer is: {}", question.answer),
        )?;
        if let Some(hint) = &question.hint {
            self.console
                .write(Tone::Hint, &format!("  Remember: {hint}"))?;
        }
        Ok(Outcome::Missed)
    }

    /// Show a snippet, ask for its output, and score the reply. Same
    /// contract as [`Runner::quiz`], but the explanation is always shown
    /// on a miss.
    pub fn predict(&mut self, prediction: &Prediction) -> Result<Outcome, ConsoleError> {
        self.console.write(Tone::Plain, "")?;
        self.session.begin_question();

        self.console.write(Tone::Heading, "  PREDICT THE OUTPUT:")?;
        for line in prediction.code.lines() {
            self.console.write(Tone::Code, &format!("    {line}"))?;
        }

        let reply = self.ask("  What will this print? > ")?;
        if prediction.accepts(&reply) {
            self.session.mark_correct();
            self.console.write(
                Tone::Good,
                &format!("  CORRECT! It prints: {}", prediction.output),
            )?;
            return Ok(Outcome::Correct);
        }

        self.console
            .write(Tone::Bad, &format!("  Answer: {}", prediction.output))?;
        self.console
            .write(Tone::Hint, &format!("  Why: {}", prediction.explanation))?;
        Ok(Outcome::Missed)
    }

    /// Wait for Enter before moving on. A no-op when pauses are disabled.
    pub fn pause(&mut self) -> Result<(), ConsoleError> {
        if !self.pauses {
            return Ok(());
        }
        self.ask("\n  Press Enter to continue... ")?;
        Ok(())
    }

    /// Run a whole lesson: intro banner, then each section in order.
    pub fn run_lesson(&mut self, lesson: &Lesson) -> Result<LessonOutcome, ConsoleError> {
        let asked_before = self.session.total();
        let correct_before = self.session.score();

        self.console.write(Tone::Plain, "")?;
        self.banner(&lesson.title)?;
        for line in lesson.summary.lines() {
            self.console.write(Tone::Plain, &format!("  {line}"))?;
        }
        self.pause()?;

        for (i, section) in lesson.sections.iter().enumerate() {
            if i > 0 {
                self.pause()?;
            }
            self.run_section(section)?;
        }

        Ok(LessonOutcome {
            lesson_id: lesson.id.clone(),
            title: lesson.title.clone(),
            asked: self.session.total() - asked_before,
            correct: self.session.score() - correct_before,
        })
    }

    fn run_section(&mut self, section: &Section) -> Result<(), ConsoleError> {
        self.console.write(Tone::Plain, "")?;
        self.banner(&section.title)?;
        for note in &section.notes {
            self.console.write(Tone::Plain, &format!("  {note}"))?;
        }

        for item in &section.items {
            match item {
                Item::Quiz(question) => self.quiz(question)?,
                Item::Predict(prediction) => self.predict(prediction)?,
            };
        }
        Ok(())
    }

    fn banner(&mut self, title: &str) -> Result<(), ConsoleError> {
        self.console.write(Tone::Heading, RULE)?;
        self.console.write(Tone::Heading, &format!("  {title}"))?;
        self.console.write(Tone::Heading, RULE)?;
        Ok(())
    }

    /// Print the results banner with the final score and grade message, and
    /// return the rounded percentage.
    ///
    /// Fails with [`crate::error::SessionError::NoQuestionsAsked`] when no
    /// question was asked, so callers must run at least one item first.
    pub fn finish(&mut self) -> Result<u8, RunError> {
        let percentage = self.session.percentage()?;
        let grade = self.session.grade()?;

        self.console.write(Tone::Plain, "")?;
        self.banner("YOUR RESULTS")?;
        self.console.write(
            Tone::Plain,
            &format!(
                "  Score: {} / {} ({}%)",
                self.session.score(),
                self.session.total(),
                percentage
            ),
        )?;

        let tone = match grade {
            Grade::Perfect | Grade::Strong => Tone::Good,
            Grade::Fair | Grade::NeedsReview => Tone::Hint,
        };
        self.console
            .write(tone, &format!("  {}", grade.message()))?;

        Ok(percentage)
    }
}
