use std::path::{Path, PathBuf};

use log::{debug, warn};
use rmcp::{
    Error as McpError, ServerHandler,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, serde_json, tool,
};

use crate::constants::MAX_SUGGESTIONS;
use crate::core::quick_note::QuickNote;
use crate::core::title::NoteTitle;
use crate::history::{scan_titles, suggest};
use crate::settings::Settings;
use crate::utils::{parse_date, today};

/// Request structure for the CreateQuickNote tool
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateQuickNoteRequest {
    /// The title of the note
    #[schemars(description = "The title of the note")]
    pub title: String,

    /// Optional date of the note
    #[schemars(description = "Optional date of the note in YYYY-MM-DD format, defaults to today")]
    #[serde(default)]
    pub date: Option<String>,
}

/// Request structure for the SuggestTitles tool
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestTitlesRequest {
    /// Text the titles should contain
    #[schemars(description = "Optional text the titles should contain (case-insensitive)")]
    #[serde(default)]
    pub query: Option<String>,

    /// Maximum number of titles to return
    #[schemars(description = "Optional maximum number of titles to return (at most 25)")]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// QuicknoteMCP tools for creating notes via MCP
#[derive(Debug, Clone)]
pub struct QuicknoteMCP {
    /// The vault directory
    vault: PathBuf,
    /// Settings loaded from the vault when the server started
    settings: Settings,
}

impl QuicknoteMCP {
    pub fn new<P: AsRef<Path>>(vault: P, settings: Settings) -> Self {
        Self {
            vault: vault.as_ref().to_path_buf(),
            settings,
        }
    }

    fn create(&self, request: CreateQuickNoteRequest) -> Result<String, String> {
        let title = NoteTitle::new(&request.title).map_err(|e| e.to_string())?;
        let date = match request.date.as_deref() {
            Some(date) => parse_date(date).map_err(|e| e.to_string())?,
            None => today(),
        };

        let outcome = QuickNote::new(date, title)
            .create(&self.vault, &self.settings)
            .map_err(|e| e.to_string())?;

        let response = serde_json::json!({
            "path": outcome.path().display().to_string(),
            "created": outcome.is_created(),
        });

        Ok(response.to_string())
    }

    fn suggestions(&self, request: SuggestTitlesRequest) -> Result<String, String> {
        let limit = request
            .limit
            .unwrap_or(self.settings.max_suggestions)
            .min(MAX_SUGGESTIONS);
        let query = request.query.as_deref().unwrap_or("");

        let entries =
            scan_titles(&self.settings.notes_root(&self.vault)).map_err(|e| e.to_string())?;
        let matches = suggest(&entries, query, limit);
        debug!("{} title suggestions for '{}'", matches.len(), query);

        serde_json::to_string(&matches).map_err(|e| e.to_string())
    }
}

// Create a static toolbox to store the tool attributes
#[tool(tool_box)]
impl QuicknoteMCP {
    /// Create a dated quick note, or find the existing one
    #[tool(description = include_str!("create_quick_note_instructions.md"))]
    fn create_quick_note(
        &self,
        #[tool(aggr)] request: CreateQuickNoteRequest,
    ) -> Result<CallToolResult, McpError> {
        match self.create(request) {
            Ok(response) => Ok(CallToolResult::success(vec![Content::text(response)])),
            Err(e) => {
                warn!("create_quick_note failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error: {}",
                    e
                ))]))
            }
        }
    }

    /// Suggest previously used titles
    #[tool(description = include_str!("suggest_titles_instructions.md"))]
    fn suggest_titles(
        &self,
        #[tool(aggr)] request: SuggestTitlesRequest,
    ) -> Result<CallToolResult, McpError> {
        match self.suggestions(request) {
            Ok(response) => Ok(CallToolResult::success(vec![Content::text(response)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {}",
                e
            ))])),
        }
    }
}

// Implement ServerHandler for QuicknoteMCP
#[tool(tool_box)]
impl ServerHandler for QuicknoteMCP {
    fn get_info(&self) -> ServerInfo {
        let instructions = include_str!("server_instructions.md");

        ServerInfo {
            instructions: Some(instructions.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
