//! MCP (Model Context Protocol) implementation for quicknote

mod tools;

pub use tools::QuicknoteMCP;

use log::info;
use rmcp::ServerHandler;
use tokio::runtime::Runtime;

/// Creates a new tokio runtime for MCP operations
pub fn create_runtime() -> Result<Runtime, std::io::Error> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

/// Runs the MCP server with the given handler
pub fn run_mcp_server<H>(handler: H) -> Result<(), Box<dyn std::error::Error>>
where
    H: ServerHandler + 'static,
{
    let rt = create_runtime()?;

    rt.block_on(async {
        use rmcp::ServiceExt;
        use tokio::io::{stdin, stdout};

        let transport = (stdin(), stdout());

        // Blocks until STDIN is closed
        let server = handler.serve(transport).await?;
        let quit_reason = server.waiting().await?;
        info!("MCP server stopped: {:?}", quit_reason);

        Ok(())
    })
}
