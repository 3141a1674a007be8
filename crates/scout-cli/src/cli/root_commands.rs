use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive screening on this terminal.
    Screen(ScreenArgs),
    /// Generate screening questions for a tech stack.
    Questions(QuestionsArgs),
    /// Extract questions from model output without calling a model.
    Extract(ExtractArgs),
    /// Decrypt a submission file with the configured key.
    Decrypt(DecryptArgs),
    /// Print a fresh encryption key.
    Keygen,
    /// Print the JSON Schema of a persisted type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ScreenArgs {
    /// Directory for submission files (defaults to `vault.output_dir`).
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct QuestionsArgs {
    /// Comma or semicolon separated technologies.
    #[arg(long)]
    pub stack: String,

    /// Candidate name, included in the prompt when given.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub years: u32,

    /// Desired position(s).
    #[arg(long, default_value = "")]
    pub desired: String,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Comma or semicolon separated technologies.
    #[arg(long)]
    pub stack: String,

    /// File with raw model output (reads stdin when omitted).
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct DecryptArgs {
    /// Path to a `submission_*.enc` file.
    pub file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum, default_value = "record")]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    /// The decrypted content of a submission file.
    Record,
    Candidate,
}
