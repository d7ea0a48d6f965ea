//! HTTP Transport for MCP
//!
//! Implements MCP protocol over HTTP using Server-Sent Events (SSE).
//!
//! # Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /sse` | Opens a session; first event `endpoint`, then one `message` per response |
//! | `POST /message?session_id=<id>` | Queues a JSON-RPC message for a session (`202`) |
//! | `POST /mcp` | Handles one JSON-RPC request and answers inline |
//!
//! # Supported Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `initialize` | Initialize the MCP session |
//! | `notifications/initialized` | Acknowledged, no response |
//! | `ping` | Health check |
//! | `tools/list` | List available tools |
//! | `tools/call` | Call a tool with arguments |
//! | `notifications/cancelled` | Cancel an in-flight session request |
//!
//! # Example
//!
//! ```text
//! POST /mcp HTTP/1.1
//! Content-Type: application/json
//!
//! {
//!     "jsonrpc": "2.0",
//!     "method": "tools/list",
//!     "id": 1
//! }
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use rmcp::ServerHandler;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::stream::{Event, EventStream};
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, State, get, post, routes};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use tmcp_domain::error::{Error, Result};

use super::types::{McpRequest, McpResponse};
use crate::McpServer;
use crate::constants::{
    JSONRPC_INVALID_PARAMS, JSONRPC_INVALID_REQUEST, JSONRPC_METHOD_NOT_FOUND, MESSAGE_PATH, SSE_ENDPOINT_EVENT,
    SSE_MESSAGE_EVENT,
};
use crate::session::{Session, SessionGuard, SessionManager, create_session_manager};
use crate::tools::route_tool_call;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }
}

/// Shared state for HTTP transport
#[derive(Clone)]
pub struct HttpTransportState {
    /// MCP server reference (for handling requests)
    pub server: Arc<McpServer>,
    /// Open SSE sessions
    pub sessions: Arc<SessionManager>,
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: HttpTransportState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, server: Arc<McpServer>) -> Self {
        Self {
            config,
            state: HttpTransportState {
                server,
                sessions: create_session_manager(),
            },
        }
    }

    /// Open sessions
    pub fn sessions(&self) -> Arc<SessionManager> {
        Arc::clone(&self.state.sessions)
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build().manage(self.state.clone()).mount(
            "/",
            routes![handle_mcp_request, handle_sse, handle_session_message],
        );

        if self.config.enable_cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Start the HTTP transport server
    pub async fn start(self) -> Result<()> {
        let addr = self.config.socket_addr();
        info!("HTTP transport listening on {}", addr);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Error::internal(format!("HTTP transport failed: {e}")))?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Reply to an inline JSON-RPC message
#[derive(rocket::Responder)]
pub enum InlineReply {
    /// Response to a request
    Response(Json<McpResponse>),
    /// Notification accepted, nothing to answer
    Accepted(Status),
}

/// Handle MCP request via HTTP POST, answering inline
#[post("/mcp", format = "json", data = "<request>")]
async fn handle_mcp_request(
    state: &State<HttpTransportState>,
    request: Json<McpRequest>,
) -> InlineReply {
    match dispatch(&state.server, None, request.into_inner(), CancellationToken::new()).await {
        Some(response) => InlineReply::Response(Json(response)),
        None => InlineReply::Accepted(Status::Accepted),
    }
}

/// Open an SSE session
///
/// The first event names the endpoint for this session's messages. The
/// session ends, cancelling its in-flight calls, when the client goes away.
#[get("/sse")]
fn handle_sse(state: &State<HttpTransportState>) -> EventStream![] {
    let (session, mut rx) = state.sessions.create();
    let guard = SessionGuard::new(Arc::clone(&state.sessions), session.id());
    let endpoint = format!("{}?session_id={}", MESSAGE_PATH, session.id());

    EventStream! {
        let _guard = guard;
        yield Event::data(endpoint).event(SSE_ENDPOINT_EVENT);
        while let Some(message) = rx.recv().await {
            yield Event::data(message).event(SSE_MESSAGE_EVENT);
        }
    }
}

/// Queue a JSON-RPC message for a session
///
/// The response, if any, is delivered on the session's event stream.
#[post("/message?<session_id>", format = "json", data = "<request>")]
fn handle_session_message(
    state: &State<HttpTransportState>,
    session_id: &str,
    request: Json<McpRequest>,
) -> Status {
    let Some(session) = state.sessions.get(session_id) else {
        warn!(session_id, "Message for unknown session");
        return Status::NotFound;
    };

    tokio::spawn(process_session_message(
        Arc::clone(&state.server),
        session,
        request.into_inner(),
    ));

    Status::Accepted
}

/// Run one session message and push its response onto the stream
///
/// The request is registered for cancellation before this returns, so a
/// `notifications/cancelled` posted right after it always finds it. A
/// request reusing the id of one still in flight is rejected.
pub fn process_session_message(
    server: Arc<McpServer>,
    session: Arc<Session>,
    request: McpRequest,
) -> impl Future<Output = ()> + Send + 'static {
    let registration = match &request.id {
        Some(id) => session.begin_request(id).map(Some).ok_or_else(|| {
            warn!(session_id = session.id(), request_id = %id, "Duplicate in-flight request id");
            McpResponse::error(
                request.id.clone(),
                JSONRPC_INVALID_REQUEST,
                format!("Request id {id} is already in flight"),
            )
        }),
        None => Ok(None),
    };

    async move {
        let in_flight = match registration {
            Ok(in_flight) => in_flight,
            Err(rejection) => {
                send_response(&session, &rejection);
                return;
            }
        };
        let cancellation = in_flight
            .as_ref()
            .map_or_else(CancellationToken::new, |r| r.token());

        let response = dispatch(&server, Some(&*session), request, cancellation).await;

        if let Some(in_flight) = &in_flight {
            session.finish_request(in_flight);
        }
        if let Some(response) = response {
            send_response(&session, &response);
        }
    }
}

fn send_response(session: &Session, response: &McpResponse) {
    match serde_json::to_string(response) {
        Ok(message) => {
            if !session.send(message) {
                debug!(session_id = session.id(), "Session closed before response");
            }
        }
        Err(e) => error!(error = %e, "Failed to serialize response"),
    }
}

/// Route a JSON-RPC message to its method handler
///
/// Returns `None` for notifications.
pub async fn dispatch(
    server: &McpServer,
    session: Option<&Session>,
    request: McpRequest,
    cancellation: CancellationToken,
) -> Option<McpResponse> {
    let response = match request.method.as_str() {
        "initialize" => handle_initialize(server, &request),
        "ping" => McpResponse::success(request.id.clone(), json!({})),
        "tools/list" => handle_tools_list(server, &request),
        "tools/call" => handle_tools_call(server, &request, cancellation).await,
        "notifications/initialized" => return None,
        "notifications/cancelled" => {
            handle_cancelled(session, &request);
            return None;
        }
        _ if request.is_notification() => {
            debug!(method = %request.method, "Ignoring unknown notification");
            return None;
        }
        _ => McpResponse::error(
            request.id.clone(),
            JSONRPC_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        ),
    };

    Some(response)
}

/// Handle the `initialize` method
///
/// Returns server information and capabilities.
fn handle_initialize(server: &McpServer, request: &McpRequest) -> McpResponse {
    let server_info = server.get_info();

    let result = json!({
        "protocolVersion": server_info.protocol_version.to_string(),
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": server_info.server_info.name,
            "version": server_info.server_info.version
        },
        "instructions": server_info.instructions
    });

    McpResponse::success(request.id.clone(), result)
}

/// Handle the `tools/list` method
///
/// Returns all available tools with their schemas.
fn handle_tools_list(server: &McpServer, request: &McpRequest) -> McpResponse {
    let tools_json: Vec<Value> = server
        .registry()
        .tools()
        .into_iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema.as_ref()
            })
        })
        .collect();

    McpResponse::success(request.id.clone(), json!({ "tools": tools_json }))
}

/// Handle the `tools/call` method
///
/// Executes the specified tool with the provided arguments.
async fn handle_tools_call(
    server: &McpServer,
    request: &McpRequest,
    cancellation: CancellationToken,
) -> McpResponse {
    let Some(params) = &request.params else {
        return McpResponse::error(
            request.id.clone(),
            JSONRPC_INVALID_PARAMS,
            "Missing params for tools/call",
        );
    };

    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return McpResponse::error(
            request.id.clone(),
            JSONRPC_INVALID_PARAMS,
            "Missing 'name' parameter for tools/call",
        );
    };
    let arguments = params.get("arguments").and_then(|v| v.as_object().cloned());

    match route_tool_call(&server.registry(), tool_name, arguments, cancellation).await {
        Ok(result) => McpResponse::success(request.id.clone(), tool_result_to_json(&result)),
        Err(e) => {
            error!(tool = tool_name, error = %e.message, "Tool call failed");
            McpResponse::error(request.id.clone(), e.code.0, e.message.to_string())
        }
    }
}

/// Convert tool call result to JSON response
fn tool_result_to_json(result: &rmcp::model::CallToolResult) -> Value {
    let content_json: Vec<Value> = result
        .content
        .iter()
        .map(|content| {
            serde_json::to_value(content).unwrap_or(json!({
                "type": "text",
                "text": "Error serializing content"
            }))
        })
        .collect();

    json!({
        "content": content_json,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Handle the `notifications/cancelled` notification
fn handle_cancelled(session: Option<&Session>, request: &McpRequest) {
    let Some(request_id) = request.params.as_ref().and_then(|p| p.get("requestId")) else {
        return;
    };
    match session {
        Some(session) if session.cancel_request(request_id) => {
            info!(session_id = session.id(), request_id = %request_id, "Request cancelled");
        }
        _ => debug!(request_id = %request_id, "No in-flight request to cancel"),
    }
}
