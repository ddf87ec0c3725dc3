//! Raibot MCP Server Implementation
//!
//! This module implements the MCP server using rmcp 0.9's #[tool_router] pattern.
//! Tool calls are routed to the simulator; resources and the prompt are served
//! from the ServerHandler methods.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
};
use tracing::{debug, error, info, instrument, warn};

use raibot_core::ServerConfig;
use raibot_simulator::{Simulator, SimulatorCommand};
use raibot_store::StateStore;

use crate::prompts::{RAIBOT_PROMPT_DESCRIPTION, RAIBOT_PROMPT_NAME, RAIBOT_PROMPT_TEXT};
use crate::resources::{self, JSON_MIME_TYPE, RESOURCES};
use crate::tools::*;

/// Map a simulation failure onto a JSON-RPC error.
///
/// Problems with the request itself are invalid params; everything else is
/// an internal error.
fn to_mcp_error(context: &str, err: &raibot_core::Error) -> McpError {
    let code = if err.is_caller_error() {
        ErrorCode(-32602) // Invalid params
    } else {
        ErrorCode(-32603) // Internal error
    };
    McpError::new(code, format!("{context}: {err}"), None)
}

/// Raibot MCP Server
///
/// Exposes the simulated robot via MCP tools, resources and a prompt.
#[derive(Clone)]
pub struct RaibotMcpServer {
    /// Simulator shared by every request
    simulator: Arc<Simulator>,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
    /// Name reported in the server info
    name: String,
}

#[tool_router]
impl RaibotMcpServer {
    /// Create a server around an existing simulator
    pub fn new(simulator: Arc<Simulator>) -> Self {
        Self {
            simulator,
            tool_router: Self::tool_router(),
            name: "raibot".to_string(),
        }
    }

    /// Create a server from configuration (data directory and terrain)
    pub fn from_config(config: &ServerConfig) -> raibot_core::Result<Self> {
        let terrain = config.simulation.terrain()?;
        let store = StateStore::open(&config.storage.data_dir);
        info!(
            "Using data directory {}",
            config.storage.data_dir.display()
        );

        let mut server = Self::new(Arc::new(Simulator::new(store, terrain)));
        server.name = config.server.name.clone();
        Ok(server)
    }

    /// Current location as "x,y"
    pub async fn location_text(&self) -> Result<String, McpError> {
        let location = self.simulator.location().await.map_err(|e| {
            error!("Error reading Raibot's location: {}", e);
            to_mcp_error("Error reading Raibot's location", &e)
        })?;
        Ok(location.to_string())
    }

    /// Run one simulator instruction, returning the confirmation text
    pub async fn simulate(&self, params: SimulatorParams) -> Result<String, McpError> {
        let command = SimulatorCommand::from(params);
        self.simulator.execute(&command).await.map_err(|e| {
            error!("Error moving Raibot: {}", e);
            to_mcp_error("Error moving Raibot", &e)
        })
    }

    /// JSON text of the resource published at `uri`
    pub async fn resource_text(&self, uri: &str) -> Result<String, McpError> {
        let spec = resources::find(uri).ok_or_else(|| {
            warn!("Unknown resource requested: {}", uri);
            McpError::resource_not_found(
                format!("Resource '{uri}' not found"),
                Some(serde_json::json!({ "uri": uri })),
            )
        })?;

        self.simulator.render(spec.key).await.map_err(|e| {
            error!("Error reading {} resource: {}", spec.key, e);
            to_mcp_error(&format!("Error reading {}", spec.name), &e)
        })
    }

    /// Introduce the server
    #[tool(description = "A simple tool that introduces itself.")]
    #[instrument(skip_all)]
    async fn hello_world(&self) -> Result<CallToolResult, McpError> {
        info!("Hello triggered");
        Ok(CallToolResult::success(vec![Content::text(HELLO_TEXT)]))
    }

    /// Report the robot's position
    #[tool(
        description = "A tool that provides the current location of a simulated Raibot.",
        annotations(read_only_hint = true)
    )]
    #[instrument(skip_all)]
    async fn raibot_location(&self) -> Result<CallToolResult, McpError> {
        debug!("Raibot location requested");
        let text = self.location_text().await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Drive the robot
    #[tool(description = "A tool that allows a simulated Raibot to be controlled.")]
    #[instrument(skip_all)]
    async fn raibot_simulator(
        &self,
        Parameters(params): Parameters<SimulatorParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Raibot instruction: direction={}, start_x={:?}, start_y={:?}",
            params.direction, params.start_x, params.start_y
        );
        let text = self.simulate(params).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for RaibotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Raibot MCP Server - Control a simulated robot on a 5x5 grid. \
                 Use raibot_simulator with direction 'start' (plus startX/startY) to place it, \
                 then 'left', 'right', 'up' or 'down' to move. raibot_location reports the \
                 current position; the memory://raibot_* resources publish the map, location \
                 and move history."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("Listing {} resources", RESOURCES.len());
        let resources = RESOURCES
            .iter()
            .map(|spec| {
                let mut raw = RawResource::new(spec.uri, spec.name.to_string());
                raw.description = Some(spec.description.to_string());
                raw.mime_type = Some(JSON_MIME_TYPE.to_string());
                raw.no_annotation()
            })
            .collect();
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!("Reading resource {}", request.uri);
        let text = self.resource_text(&request.uri).await?;

        let mut contents = ResourceContents::text(text, request.uri.clone());
        if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
            *mime_type = Some(JSON_MIME_TYPE.to_string());
        }
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult::with_all_items(vec![Prompt::new(
            RAIBOT_PROMPT_NAME,
            Some(RAIBOT_PROMPT_DESCRIPTION),
            None,
        )]))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        if request.name != RAIBOT_PROMPT_NAME {
            warn!("Unknown prompt requested: {}", request.name);
            return Err(McpError::new(
                ErrorCode(-32602), // Invalid params
                format!("Prompt '{}' not found", request.name),
                None,
            ));
        }

        Ok(GetPromptResult {
            description: Some(RAIBOT_PROMPT_DESCRIPTION.to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::Assistant,
                RAIBOT_PROMPT_TEXT,
            )],
        })
    }
}
