use std::sync::Arc;

use crate::attendance::{AttendanceStore, EventLog};
use crate::core::Config;
use crate::roster::Roster;

/// 服务器共享状态
///
/// 所有 handler 通过 axum 的 `State` extractor 访问。
/// 内部组件都是 `Arc` 包裹，`Clone` 开销很小。
#[derive(Debug, Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 花名册（启动时加载，只读）
    pub roster: Arc<Roster>,
    /// 考勤存储
    pub attendance: Arc<AttendanceStore>,
    /// 最近事件环形日志
    pub event_log: Arc<EventLog>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 加载花名册并创建空的考勤存储和事件日志
    pub fn initialize(config: &Config) -> Self {
        let roster = Roster::load(&config.roster_path);

        Self {
            config: config.clone(),
            roster: Arc::new(roster),
            attendance: Arc::new(AttendanceStore::new(config.late_policy())),
            event_log: Arc::new(EventLog::new()),
        }
    }
}
