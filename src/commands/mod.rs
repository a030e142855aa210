//! Command handlers for the quicknote CLI

mod mcp;
mod new;
mod settings;
mod titles;

pub use mcp::mcp_command;
pub use new::{new_note, title_from_stdin};
pub use settings::settings_command;
pub use titles::list_titles;
