//! Attend Server - 门禁考勤汇总节点
//!
//! # 架构概述
//!
//! 接收门禁终端上报的进门事件，按人按天聚合出勤，并以月度矩阵输出报表：
//!
//! - **花名册** (`roster`): 启动时从 JSON 文件加载的人员名单
//! - **考勤** (`attendance`): 按人按天聚合、迟到判定、最近事件日志
//! - **认证** (`auth`): 终端共享密钥校验
//! - **HTTP API** (`api`): 事件上报与报表接口
//!
//! # 模块结构
//!
//! ```text
//! attend-server/src/
//! ├── core/          # 配置、状态、服务器生命周期
//! ├── auth/          # 终端密钥中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── attendance/    # 考勤存储、月度矩阵、事件日志
//! ├── roster/        # 花名册
//! └── utils/         # 日志、时钟
//! ```

pub mod api;
pub mod attendance;
pub mod auth;
pub mod core;
pub mod roster;
pub mod utils;

// Re-export 公共类型
pub use attendance::{AttendanceStore, EventLog};
pub use core::{Config, Server, ServerState};
pub use roster::Roster;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ___   __  __                 __
   /   | / /_/ /____  ____  ____/ /
  / /| |/ __/ __/ _ \/ __ \/ __  /
 / ___ / /_/ /_/  __/ / / / /_/ /
/_/  |_\__/\__/\___/_/ /_/\__,_/
    "#
    );
}

/// 设置运行环境 (dotenv + 日志)
///
/// `.env` 不存在时静默跳过，日志级别和目录都从环境变量读取。
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
