use clap::{Parser, ValueEnum};
use sitenav::ExpansionState;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitenav")]
#[command(about = "Extracts navigation link structure from documentation pages")]
#[command(version)]
pub struct Args {
    /// Page URL to extract navigation from
    pub url: Option<String>,

    /// Only report the section with this accessible label
    #[arg(short, long)]
    pub section: Option<String>,

    /// Only report links in this expansion state
    #[arg(long, value_enum)]
    pub state: Option<StateArg>,

    /// Follow collapsed entries of the selected section and assemble the
    /// full table of contents
    #[arg(long)]
    pub toc: bool,

    /// JSON configuration file (start URL, section label, follow rules)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Expanded,
    Collapsed,
    NotApplicable,
}

/// Convert from the CLI flag to the model's expansion state
pub fn convert_state(arg: StateArg) -> ExpansionState {
    match arg {
        StateArg::Expanded => ExpansionState::Expanded,
        StateArg::Collapsed => ExpansionState::Collapsed,
        StateArg::NotApplicable => ExpansionState::NotApplicable,
    }
}
