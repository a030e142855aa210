use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Create dated quick notes organized by year and month")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory holding the notes
    #[arg(short = 'd', long = "vault", global = true)]
    pub vault: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Title of the note (if no subcommand is provided, defaults to 'new')
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new quick note (or find today's note with the same title)
    New(NewArgs),

    /// List previously used titles, most recent first
    Titles(TitlesArgs),

    /// Show or change settings
    Settings(SettingsArgs),

    /// Start the MCP server
    Mcp,
}

#[derive(Args, Default)]
pub struct NewArgs {
    /// Date of the note (YYYY-MM-DD), defaults to today
    #[arg(long = "date")]
    pub date: Option<String>,

    /// Open the note in $VISUAL/$EDITOR afterwards
    #[arg(short = 'e', long = "edit", conflicts_with = "no_edit")]
    pub edit: bool,

    /// Do not open the note, even if the settings say so
    #[arg(long = "no-edit")]
    pub no_edit: bool,

    /// Title of the note
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,
}

#[derive(Args)]
pub struct TitlesArgs {
    /// Only show titles containing this text
    pub query: Option<String>,

    /// Maximum number of titles to show
    #[arg(short = 'n', long = "limit")]
    pub limit: Option<usize>,

    /// Prefix each title with the date it was last used
    #[arg(long = "dates")]
    pub dates: bool,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Write a settings file with default values if none exists
    #[arg(long = "init")]
    pub init: bool,

    #[command(subcommand)]
    pub action: Option<SettingsAction>,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Change a single setting and save it
    Set {
        /// Setting name, e.g. base_folder or template
        key: String,
        /// New value
        value: String,
    },
}
