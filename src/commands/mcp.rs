use std::path::Path;

use log::info;

use crate::error::{QuicknoteError, Result};
use crate::mcp::{self, QuicknoteMCP};
use crate::settings::Settings;

/// Handle the mcp command
pub fn mcp_command(vault: &Path, settings: Settings) -> Result<()> {
    info!("Starting MCP server for {}", vault.display());

    mcp::run_mcp_server(QuicknoteMCP::new(vault, settings))
        .map_err(|e| QuicknoteError::McpServerError(e.to_string()))
}
