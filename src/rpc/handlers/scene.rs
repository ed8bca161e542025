//! Scene operations: Load, GetItems, IsVisible, Close

use crate::io::{parse_file, parse_input};
use crate::rpc::protocol::{error_codes, Response};
use crate::rpc::state::ServerState;
use crate::rpc::util::{parse_params, require_scene};
use crate::select::{covered_by, is_visible};
use serde::Deserialize;
use std::time::Instant;
use tracing::info;

/// Handle Load request - parses scene text given inline or by path
pub fn handle_load(
    state: &mut ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct LoadParams {
        text: Option<String>,
        file_path: Option<String>,
    }

    let p: LoadParams = match parse_params(id.clone(), params, "{text: string} or {file_path: string}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let start = Instant::now();
    let (source, parsed) = match (p.text, p.file_path) {
        (Some(text), None) => ("<inline>".to_string(), parse_input(&text)),
        (None, Some(path)) => {
            info!("Loading scene file: {}", path);
            let parsed = parse_file(&path);
            (path, parsed)
        }
        _ => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected exactly one of {text, file_path}".to_string());
        }
    };

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            return Response::error(id, error_codes::PARSE_FAILED, format!("Failed to parse scene: {}", e));
        }
    };

    let result = serde_json::json!({
        "status": "ok",
        "items": parsed.scene.len(),
        "clicks": parsed.clicks.len(),
        "terminated": parsed.terminated,
    });
    info!("Scene {} loaded in {:.2?}: {} items, {} clicks",
        source, start.elapsed(), parsed.scene.len(), parsed.clicks.len());
    state.install(parsed);

    Response::success(id, result)
}

/// Handle GetItems request - lists items bottom to top
pub fn handle_get_items(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let scene = match require_scene(state, &id) {
        Ok(scene) => scene,
        Err(e) => return e,
    };

    let items: Vec<serde_json::Value> = scene.items()
        .enumerate()
        .map(|(index, item)| serde_json::json!({
            "index": index,
            "name": item.name(),
            "kind": item.kind(),
            "bounds": item.footprint().bounds(),
            "visible": is_visible(scene, index),
        }))
        .collect();

    Response::success(id, serde_json::Value::Array(items))
}

/// Handle IsVisible request - occlusion check for one item by index or name
pub fn handle_is_visible(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        index: Option<usize>,
        name: Option<String>,
    }

    let p: Params = match parse_params(id.clone(), params, "{index: number} or {name: string}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let scene = match require_scene(state, &id) {
        Ok(scene) => scene,
        Err(e) => return e,
    };

    let index = match (p.index, p.name) {
        (Some(index), _) if index < scene.len() => index,
        (None, Some(name)) => match scene.find(&name) {
            Some((index, _)) => index,
            None => {
                return Response::error(id, error_codes::ITEM_NOT_FOUND,
                    format!("Item not found: {}", name));
            }
        },
        (Some(index), _) => {
            return Response::error(id, error_codes::ITEM_NOT_FOUND,
                format!("Item index out of range: {}", index));
        }
        (None, None) => {
            return Response::error(id, error_codes::INVALID_PARAMS,
                "Invalid params: expected {index: number} or {name: string}".to_string());
        }
    };

    let covering = covered_by(scene, index).and_then(|i| scene.get(i)).map(|item| item.name());
    Response::success(id, serde_json::json!({
        "index": index,
        "visible": covering.is_none(),
        "covered_by": covering,
    }))
}

/// Handle Close request - drops the loaded scene
pub fn handle_close(state: &mut ServerState, id: Option<serde_json::Value>) -> Response {
    state.clear();
    Response::success(id, serde_json::json!({"status": "ok"}))
}
