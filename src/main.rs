mod cli;
mod commands;
mod constants;
mod core;
mod error;
mod history;
mod mcp;
mod settings;
mod utils;

use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use env_logger::Env;

use cli::{Cli, Commands, NewArgs};
use error::Result;
use settings::Settings;
use utils::{ensure_vault_exists, ensure_vault_writable, get_vault_dir};

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::init_from_env(Env::new().filter_or("RUST_LOG", default_filter));

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Read stdin when it is piped, for titles supplied as `echo Title | quicknote`
fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    if atty::isnt(atty::Stream::Stdin) {
        io::stdin().read_to_string(&mut buffer)?;
    }
    Ok(buffer)
}

fn run(cli: Cli) -> Result<()> {
    let vault = get_vault_dir(cli.vault)?;
    ensure_vault_exists(&vault)?;

    match cli.command {
        Some(Commands::New(args)) => create_note(&vault, args),
        Some(Commands::Titles(args)) => {
            commands::list_titles(&vault, &Settings::load(&vault)?, args)
        }
        Some(Commands::Settings(args)) => commands::settings_command(&vault, args),
        Some(Commands::Mcp) => commands::mcp_command(&vault, Settings::load(&vault)?),
        None => {
            // If no subcommand is provided, treat trailing args as the title of a new note
            let args = NewArgs {
                args: cli.args,
                ..Default::default()
            };
            create_note(&vault, args)
        }
    }
}

fn create_note(vault: &Path, args: NewArgs) -> Result<()> {
    ensure_vault_writable(vault)?;
    let settings = Settings::load(vault)?;
    // Only touch stdin when the title has to come from it, so an open pipe never blocks
    let stdin_content = if commands::title_from_stdin(&args) {
        read_stdin()?
    } else {
        String::new()
    };
    commands::new_note(vault, &settings, args, &stdin_content).map(|_| ())
}
