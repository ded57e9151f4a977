use crate::commands;
use crate::config::Config;
use crate::core::Leaderboard;
use crate::error::MelloError;
use crate::message;
use crate::models::Member;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Leaderboard bot MCP server
#[derive(Clone)]
pub struct LeaderboardMcp {
    board: Leaderboard,
    tool_router: ToolRouter<Self>,
}

// Input types for tools
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SubmitInput {
    /// Platform user ID of the submitter
    pub user_id: String,
    /// Account username of the submitter
    pub username: String,
    /// Community nickname, preferred over the username when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    /// Run time as Minutes:Seconds
    pub time: String,
    /// Date as MM/DD/YYYY, defaults to today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NicknameInput {
    pub user_id: String,
    pub nickname: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LeaderboardInput {
    /// Number of runs to return, defaults to the configured size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

// Response type
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Log the full error and answer with the member-safe message only
fn error_to_response(e: MelloError) -> McpResponse<serde_json::Value> {
    error!(error = %e, "command failed");
    McpResponse::error(e.code(), e.user_message())
}

fn reply(result: Result<String, MelloError>) -> McpResponse<serde_json::Value> {
    match result {
        Ok(message) => McpResponse::success(serde_json::json!({ "message": message })),
        Err(e) => error_to_response(e),
    }
}

impl LeaderboardMcp {
    fn submit_response(&self, p: SubmitInput) -> McpResponse<serde_json::Value> {
        let member = Member {
            user_id: p.user_id,
            nick: p.nick,
            username: p.username,
        };
        reply(commands::submit(
            &self.board,
            &member,
            p.date.as_deref(),
            &p.time,
        ))
    }

    fn nickname_response(&self, p: NicknameInput) -> McpResponse<serde_json::Value> {
        reply(commands::nickname(&self.board, &p.user_id, &p.nickname))
    }

    fn leaderboard_response(&self, count: Option<i64>) -> McpResponse<serde_json::Value> {
        let count = count.unwrap_or_else(|| self.board.config().leaderboard_size());
        match self.board.top_scores(count) {
            Ok(scores) => McpResponse::success(serde_json::json!({
                "message": message::leaderboard(count, &scores),
                "scores": scores
            })),
            Err(e) => error_to_response(e),
        }
    }
}

#[tool_router]
impl LeaderboardMcp {
    pub fn new(board: Leaderboard) -> Self {
        Self {
            board,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Submit a speedrun time for a member. Provide the time as Minutes:Seconds and optionally a date as MM/DD/YYYY; without a date the run counts for today. The member's current display name becomes their leaderboard name on first submission."
    )]
    async fn submit_score(
        &self,
        params: Parameters<SubmitInput>,
    ) -> Result<CallToolResult, McpError> {
        to_json(self.submit_response(params.0))
    }

    #[tool(
        description = "Change the name shown on the leaderboard for a member. Applies to all of their past runs."
    )]
    async fn set_nickname(
        &self,
        params: Parameters<NicknameInput>,
    ) -> Result<CallToolResult, McpError> {
        to_json(self.nickname_response(params.0))
    }

    #[tool(
        description = "Show the fastest runs of all time, with each runner's current leaderboard name. Returns the rendered leaderboard message and the rows."
    )]
    async fn leaderboard(
        &self,
        params: Parameters<LeaderboardInput>,
    ) -> Result<CallToolResult, McpError> {
        to_json(self.leaderboard_response(params.0.count))
    }
}

#[tool_handler]
impl ServerHandler for LeaderboardMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Speedrun leaderboard bot. Forward member commands here: submit_score records a run, \
                 set_nickname changes a member's leaderboard name, leaderboard shows the fastest runs. \
                 Every response carries a message ready to post back to the chat.".to_string()
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_mcp_server(config: Config) -> anyhow::Result<()> {
    let board = Leaderboard::new(config);
    board.initialize()?;
    info!(db = %board.config().db_path().display(), "score database ready");

    let service = LeaderboardMcp::new(board)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            error!(error = %e, "error starting MCP server");
        })?;

    service.waiting().await?;
    Ok(())
}
