//! drillbook CLI — the user-facing command-line interface.

use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drillbook", version, about = "Interactive terminal drills for learning Rust")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lessons interactively
    Run {
        /// Lesson ids to run, comma-separated (default: all, in order)
        #[arg(long)]
        lesson: Option<String>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,

        /// Skip the "Press Enter to continue" gates
        #[arg(long)]
        no_pause: bool,
    },

    /// List the built-in lessons
    List,

    /// Check the built-in lessons for content mistakes
    Validate,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drillbook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            lesson,
            no_color,
            no_pause,
        } => commands::run::execute(lesson, no_color, no_pause),
        Commands::List => commands::list::execute(),
        Commands::Validate => commands::validate::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
