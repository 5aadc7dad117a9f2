//! 调试路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /debug/events | GET | 最近接收的事件 (最新在前) | 终端密钥 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::attendance::LoggedEvent;
use crate::core::ServerState;

/// 调试路由 - 需要终端密钥
pub fn router() -> Router<ServerState> {
    Router::new().route("/debug/events", get(recent_events))
}

/// 最近事件响应
#[derive(Serialize)]
pub struct RecentEventsResponse {
    /// 本次返回的事件条数
    count: usize,
    /// 事件列表，最新在前
    events: Vec<LoggedEvent>,
}

/// GET /debug/events - 最近接收的事件
///
/// 环形缓冲只保留最近 100 条，重启后清空。
pub async fn recent_events(State(state): State<ServerState>) -> Json<RecentEventsResponse> {
    let events = state.event_log.snapshot();
    Json(RecentEventsResponse {
        count: events.len(),
        events,
    })
}
