use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "simscan",
    about = "Detect overlapping text across a document corpus"
)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank every document pair in a folder by textual overlap
    Scan(ScanArgs),
    /// Compare two files and show their shared fragments
    Compare(CompareArgs),
    /// Serve the highlighted HTML report over HTTP
    Serve(ServeArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Scan --

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Corpus directory to scan
    pub folder: PathBuf,

    /// Minimum fragment length in characters
    #[arg(short = 'm', long, default_value = "5")]
    pub min_length: usize,

    /// Number of pairs to report
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,

    /// Only scan files whose relative path matches this glob
    #[arg(long)]
    pub include: Option<String>,

    /// Stop-word file (one word per line) replacing the built-in list
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// Count every fragment, even all-stop-word ones
    #[arg(long)]
    pub no_stop_words: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// List each pair's shared fragments
    #[arg(long)]
    pub fragments: bool,

    /// Also write the highlighted HTML report to this file
    #[arg(long)]
    pub html: Option<PathBuf>,
}

// -- Compare --

#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// First file
    pub file_a: PathBuf,

    /// Second file
    pub file_b: PathBuf,

    /// Minimum fragment length in characters
    #[arg(short = 'm', long, default_value = "5")]
    pub min_length: usize,

    /// Stop-word file (one word per line) replacing the built-in list
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// Count every fragment, even all-stop-word ones
    #[arg(long)]
    pub no_stop_words: bool,

    /// Output the comparison as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Serve --

#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Default corpus directory (overridable per request with ?folder=)
    pub folder: PathBuf,

    /// Listen address
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,

    /// Minimum fragment length in characters
    #[arg(short = 'm', long, default_value = "5")]
    pub min_length: usize,

    /// Number of pairs to report
    #[arg(short = 'n', long, default_value = "10")]
    pub top: usize,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "simscan",
            &mut std::io::stdout(),
        );
    }
}
