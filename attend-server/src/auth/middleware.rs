//! 认证中间件
//!
//! 校验考勤终端上报时携带的共享密钥

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::error::AppError;

use crate::core::ServerState;
use crate::security_log;

/// 需要终端密钥的路径
const PROTECTED_PATHS: [&str; 2] = ["/events", "/debug/events"];

/// 终端密钥认证中间件
///
/// 密钥放在以下任一请求头中：
///
/// - `x-agent-token: <token>`
/// - `Authorization: Bearer <token>`
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 不在 [`PROTECTED_PATHS`] 中的路径 (`/`, `/health`, `/report`)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 缺少密钥 | 401 NotAuthenticated |
/// | 密钥不匹配 | 401 TokenInvalid |
pub async fn require_agent_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();
    if !PROTECTED_PATHS.contains(&path) {
        return Ok(next.run(req).await);
    }

    let Some(token) = extract_token(&req) else {
        security_log!("WARN", "token_missing", uri = format!("{:?}", req.uri()));
        return Err(AppError::not_authenticated());
    };

    if token != state.config.agent_token {
        security_log!("WARN", "token_mismatch", uri = format!("{:?}", req.uri()));
        return Err(AppError::invalid_token());
    }

    Ok(next.run(req).await)
}

/// 从请求头提取终端密钥
fn extract_token(req: &Request) -> Option<&str> {
    if let Some(value) = req.headers().get("x-agent-token") {
        return value.to_str().ok();
    }

    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
