//! 考勤领域模块
//!
//! # 模块结构
//!
//! - [`store`] - 聚合存储（每人每天一条记录）
//! - [`matrix`] - 月度矩阵投影
//! - [`log`] - 原始事件诊断日志

pub mod log;
pub mod matrix;
pub mod store;

pub use log::{EVENT_LOG_CAPACITY, EventLog, LogStatus, LoggedEvent};
pub use matrix::build_matrix;
pub use store::AttendanceStore;
