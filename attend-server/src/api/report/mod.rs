//! Report API 模块 (月度考勤矩阵)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/report", get(handler::month_report))
}
