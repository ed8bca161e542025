//! Utility functions for request handlers

use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use crate::scene::Scene;
use serde::de::DeserializeOwned;

/// Decode request params, or build the INVALID_PARAMS response to send back
pub fn parse_params<T: DeserializeOwned>(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
    expected: &str,
) -> Result<T, Response> {
    let value = params.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|_| {
        Response::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("Invalid params: expected {}", expected),
        )
    })
}

/// Loaded scene, or the NO_SCENE_LOADED response
pub fn require_scene<'a>(state: &'a ServerState, id: &Option<serde_json::Value>) -> Result<&'a Scene, Response> {
    state.scene.as_ref().ok_or_else(|| {
        Response::error(
            id.clone(),
            error_codes::NO_SCENE_LOADED,
            "No scene loaded. Call Load first.".to_string(),
        )
    })
}

/// Success response carrying `value`, or INTERNAL_ERROR if it fails to serialize
pub fn json_response<T: serde::Serialize>(id: Option<serde_json::Value>, value: &T) -> Response {
    match serde_json::to_value(value) {
        Ok(result) => Response::success(id, result),
        Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, format!("Failed to serialize result: {}", e)),
    }
}
