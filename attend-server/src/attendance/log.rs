//! 原始事件日志
//!
//! 保留最近的接入尝试（含被跳过和校验失败的），供 `/debug/events`
//! 诊断终端问题。有界环形缓冲，最新在前，超出容量即丢弃最旧的。
//! 仅用于诊断，考勤状态的权威数据在 [`super::AttendanceStore`]。

use chrono::NaiveDateTime;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use shared::models::NormalizedEvent;
use std::collections::VecDeque;
use uuid::Uuid;

/// 默认保留条数
pub const EVENT_LOG_CAPACITY: usize = 100;

/// 一次接入尝试的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// 已合并进考勤
    Recorded,
    /// outcome 非 granted，已确认但未合并
    Skipped,
    /// 载荷未通过校验
    Invalid,
}

/// 日志条目
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEvent {
    pub id: Uuid,
    pub received_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub status: LogStatus,
    /// 原始载荷原样保留
    pub payload: Value,
}

impl LoggedEvent {
    pub fn recorded(event: &NormalizedEvent, received_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at,
            person_id: Some(event.person_id.clone()),
            outcome: Some(event.outcome.to_string()),
            status: LogStatus::Recorded,
            payload: event.raw.clone(),
        }
    }

    pub fn skipped(event: &NormalizedEvent, received_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at,
            person_id: Some(event.person_id.clone()),
            outcome: Some(event.outcome.to_string()),
            status: LogStatus::Skipped,
            payload: event.raw.clone(),
        }
    }

    pub fn invalid(payload: &Value, received_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at,
            person_id: None,
            outcome: None,
            status: LogStatus::Invalid,
            payload: payload.clone(),
        }
    }
}

/// 有界、最新在前的事件日志
#[derive(Debug)]
pub struct EventLog {
    capacity: usize,
    entries: RwLock<VecDeque<LoggedEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push(&self, entry: LoggedEvent) {
        let mut entries = self.entries.write();
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    /// 当前内容快照，最新在前
    pub fn snapshot(&self) -> Vec<LoggedEvent> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
