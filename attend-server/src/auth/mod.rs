//! 认证模块 - 终端共享密钥校验

pub mod middleware;

pub use middleware::require_agent_token;
