//! quizgrid CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizgrid", version, about = "Crossword and assignment tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate assignment or crossword documents
    Validate {
        /// Path to an assignment JSON file or directory
        #[arg(long, conflicts_with = "crossword")]
        assignment: Option<PathBuf>,

        /// Path to a crossword JSON file
        #[arg(long)]
        crossword: Option<PathBuf>,

        /// Exit with code 1 when warnings are found
        #[arg(long)]
        strict: bool,
    },

    /// Score an answer set against an assignment
    Score {
        /// Path to the assignment JSON
        #[arg(long)]
        assignment: PathBuf,

        /// Path to the answers JSON array
        #[arg(long)]
        answers: PathBuf,

        /// Write the report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report format: json, markdown, html. Only meaningful with
        /// `--output`; the terminal summary is always a table.
        #[arg(long, default_value = "json", requires = "output")]
        format: String,
    },

    /// Print a crossword document as an ASCII grid
    Render {
        /// Path to the crossword JSON
        #[arg(long)]
        crossword: PathBuf,
    },

    /// Create starter assignment and crossword documents
    Init {
        /// Directory to write the starter files into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgrid=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            assignment,
            crossword,
            strict,
        } => commands::validate::execute(assignment, crossword, strict),
        Commands::Score {
            assignment,
            answers,
            output,
            format,
        } => commands::score::execute(assignment, answers, output, format),
        Commands::Render { crossword } => commands::render::execute(crossword),
        Commands::Init { dir } => commands::init::execute(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
