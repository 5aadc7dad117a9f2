//! Events API 模块 (终端事件上报)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/events", post(handler::ingest))
}
