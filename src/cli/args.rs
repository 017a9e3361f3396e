//! CLI argument definitions using clap

use clap::Parser;
use clap_complete::Shell;

/// claude-export - Export a Claude conversation to Markdown
#[derive(Parser, Debug)]
#[command(name = "claude-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Also save a context summary to the Claude projects folder
    #[arg(long)]
    pub claude: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
