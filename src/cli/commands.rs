//! CLI arguments and parsing

use crate::pagination::StallPolicy;
use clap::Parser;
use std::path::PathBuf;

/// List the events of a Meetup group as canonical JSON
#[derive(Parser, Debug)]
#[command(name = "meetup-events")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Group URL name (e.g. aix-en-provence)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Bearer token
    #[arg(short, long, env = "MEETUP_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Events requested per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Fail after this many pages
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Behavior when a page does not advance pagination
    #[arg(long, value_enum)]
    pub stall: Option<StallArg>,

    /// Drop events missing a uid, name or start time
    #[arg(long)]
    pub only_valid: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Stall policy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StallArg {
    /// Warn and keep requesting pages
    Continue,
    /// Return the events fetched so far
    Stop,
    /// Fail the run
    Fail,
}

impl From<StallArg> for StallPolicy {
    fn from(arg: StallArg) -> Self {
        match arg {
            StallArg::Continue => Self::Continue,
            StallArg::Stop => Self::Stop,
            StallArg::Fail => Self::Fail,
        }
    }
}
