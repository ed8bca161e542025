//! Selection handlers: Select, SelectAll

use crate::io::{RenderOptions, SelectionRecord};
use crate::rpc::protocol::Response;
use crate::rpc::state::ServerState;
use crate::rpc::util::{json_response, parse_params, require_scene};
use crate::scene::Point;
use crate::select::{select, select_all};
use serde::Deserialize;

/// Handle Select request - resolves a single click
pub fn handle_select(
    state: &ServerState,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params { x: i32, y: i32 }

    let p: Params = match parse_params(id.clone(), params, "{x: int, y: int}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let scene = match require_scene(state, &id) {
        Ok(scene) => scene,
        Err(e) => return e,
    };

    let selection = select(scene, &Point::new(p.x, p.y));
    let record = SelectionRecord::new(&selection, &RenderOptions::default());
    json_response(id, &record)
}

/// Handle SelectAll request - resolves every click point from the loaded input
pub fn handle_select_all(state: &ServerState, id: Option<serde_json::Value>) -> Response {
    let scene = match require_scene(state, &id) {
        Ok(scene) => scene,
        Err(e) => return e,
    };

    let options = RenderOptions::default();
    let records: Vec<SelectionRecord<'_>> = select_all(scene, &state.clicks)
        .iter()
        .map(|selection| SelectionRecord::new(selection, &options))
        .collect();
    json_response(id, &records)
}
