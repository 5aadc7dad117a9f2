use std::net::SocketAddr;
use std::time::Duration;

use axum_server::Handle;

use crate::api;
use crate::core::{Config, ServerState};

/// 考勤服务器
///
/// 负责初始化共享状态、组装路由并启动 HTTP 服务。
/// 收到 Ctrl+C 后优雅关闭，最多等待 10 秒让在途请求完成。
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    /// 创建服务器实例，状态在 `run` 时初始化
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// 使用预先初始化的状态创建服务器实例
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// 启动 HTTP 服务，阻塞直到关闭
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let state = match self.state.take() {
            Some(state) => state,
            None => ServerState::initialize(&self.config),
        };

        if self.config.is_default_token() {
            tracing::warn!(
                "⚠️  AGENT_TOKEN is the built-in default; change it before exposing this server"
            );
        }

        let app = api::build_router(state);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));

        let handle = Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("🛑 Shutdown signal received");
                shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
            }
        });

        tracing::info!("🚀 Attend server listening on {}", addr);

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        tracing::info!("👋 Attend server stopped");
        Ok(())
    }
}
