//! API 路由模块
//!
//! # 路由表
//!
//! | 方法 | 路径 | 认证 | 说明 |
//! |------|------|------|------|
//! | GET | / | 否 | 手动测试页面 |
//! | GET | /health | 否 | 健康检查 |
//! | POST | /events | 是 | 终端事件上报 |
//! | GET | /report | 否 | 月度考勤矩阵 |
//! | GET | /debug/events | 是 | 最近接收的事件 |

pub mod debug;
pub mod events;
pub mod health;
pub mod index;
pub mod report;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_agent_token;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(index::router())
        .merge(health::router())
        .merge(events::router())
        .merge(report::router())
        .merge(debug::router())
}

/// 组装带完整中间件链的路由
///
/// 集成测试也经由此函数构建路由，和线上走同一条中间件链。
pub fn build_router(state: ServerState) -> Router {
    build_app()
        // 终端密钥中间件 - require_agent_token 内部会跳过公共路由
        // 使用 from_fn_with_state 以便中间件可以访问 ServerState
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_agent_token,
        ))
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
