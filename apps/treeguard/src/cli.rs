//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "treeguard",
    version,
    about = "Verify repository structure against a rule table",
    long_about = "treeguard — checks that a project tree carries the files and folders its rule table requires.\n\nRun it from the repository root; it exits 0 when every required entry is satisfied and 1 otherwise.\n\nConfiguration precedence: CLI > treeguard.toml > built-in rules.",
    after_help = "Examples:\n  treeguard\n  treeguard --output json\n  treeguard --config ci/structure.toml --skip-optional\n  treeguard rules > treeguard.toml"
)]
/// Top-level CLI options. Without a subcommand the repository is checked.
pub struct Cli {
    #[arg(long, global = true, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, global = true, help = "Rules file (default: treeguard.toml|yaml|yml in the root)")]
    pub config: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not evaluate optional entries")]
    pub skip_optional: bool,
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Auxiliary subcommands.
pub enum Commands {
    /// Print the effective rule table
    #[command(
        about = "Print the effective rule table",
        long_about = "Print the rule table that a check would use, as a TOML document. Redirect it into treeguard.toml to start customizing."
    )]
    Rules,
}
