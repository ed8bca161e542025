//! Selection server module - line-delimited JSON-RPC over stdin/stdout
//!
//! # Module Structure
//! - `protocol` - JSON-RPC request/response types
//! - `state` - Loaded scene and click points
//! - `util` - Param decoding helpers
//! - `handlers` - Request handlers organized by functionality

pub mod handlers;
pub mod protocol;
pub mod state;
pub mod util;

pub use protocol::{error_codes, ErrorResponse, Request, Response};
pub use state::ServerState;

use handlers::*;

/// Route one request to its handler
pub fn dispatch(state: &mut ServerState, request: Request) -> Response {
    match request.method.as_str() {
        "Load" => handle_load(state, request.id, request.params),
        "GetItems" => handle_get_items(state, request.id),
        "Select" => handle_select(state, request.id, request.params),
        "SelectAll" => handle_select_all(state, request.id),
        "IsVisible" => handle_is_visible(state, request.id, request.params),
        "Close" => handle_close(state, request.id),
        _ => Response::error(
            request.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}

/// Handle one raw input line; `None` for blank lines
pub fn handle_line(state: &mut ServerState, line: &str) -> Option<Response> {
    if line.trim().is_empty() {
        return None;
    }
    let value = match serde_json::from_str::<serde_json::Value>(line) {
        Ok(value) => value,
        Err(e) => {
            return Some(Response::error(None, error_codes::PARSE_ERROR, format!("Failed to parse request: {}", e)));
        }
    };
    // Valid JSON but not a request: echo its id when it has one
    let id = value.get("id").cloned().filter(|id| !id.is_null());
    let response = match serde_json::from_value::<Request>(value) {
        Ok(request) => dispatch(state, request),
        Err(e) => Response::error(id, error_codes::INVALID_REQUEST, format!("Invalid request: {}", e)),
    };
    Some(response)
}
