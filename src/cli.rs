//! CLI argument parsing for the README generator.
//!
//! The CLI is intentionally thin: it collects raw flag values and leaves
//! defaulting that depends on the selected variant (see `--badges`) to
//! request construction, so parsing stays free of policy.
use clap::{Parser, Subcommand};

/// Root CLI entrypoint.
///
/// Keeping a single `RootArgs` type makes command routing obvious and avoids
/// hidden defaults in subcommand constructors.
#[derive(Parser, Debug)]
#[command(
    name = "readmegen",
    version,
    about = "CLI tool to generate a README.md file with AI-enhanced features",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
}

/// Init command inputs for generating a README.
#[derive(Parser, Debug)]
#[command(about = "Initialize a new README with AI-enhanced content")]
pub struct InitArgs {
    /// Name of the project
    pub project_name: String,

    /// Short description of the project
    pub description: String,

    /// Choose a README template (accepted but currently unused)
    #[arg(long, value_name = "TYPE", default_value = "simple")]
    pub template: String,

    /// Specify the license type
    #[arg(long, value_name = "TYPE", default_value = "MIT")]
    pub license: String,

    /// Installation commands
    #[arg(long, value_name = "COMMANDS", default_value = "npm install")]
    pub install: String,

    /// Usage example
    #[arg(long, value_name = "EXAMPLE", default_value = "npm start")]
    pub usage: String,

    /// Contributing guidelines
    #[arg(
        long,
        value_name = "GUIDELINES",
        default_value = "Feel free to submit a pull request!"
    )]
    pub contributing: String,

    /// Comma-separated list of badges (default depends on --no-ai)
    #[arg(long, value_name = "BADGE_LIST")]
    pub badges: Option<String>,

    /// Include a table of contents
    #[arg(long)]
    pub table_of_contents: bool,

    /// Skip AI/GIF enrichment and generate a plain README
    #[arg(long)]
    pub no_ai: bool,
}
