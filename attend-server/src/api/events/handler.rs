//! Events API Handlers

use axum::{Json, extract::State};
use serde_json::Value;

use shared::error::AppResult;
use shared::models::{EventAck, IngestAck, NormalizedEvent, SkippedAck};

use crate::attendance::LoggedEvent;
use crate::core::ServerState;
use crate::utils::time;

/// POST /events - 接收终端上报的门禁事件
///
/// 请求体是终端的原始 JSON，字段名因固件版本而异，
/// 在 [`NormalizedEvent::from_payload`] 中统一归一化。
///
/// # 响应
///
/// - 已放行事件: 合并后的当日考勤摘要
/// - 未放行事件: `{"skipped": true, "reason": "<outcome>"}`
pub async fn ingest(
    State(state): State<ServerState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<IngestAck>> {
    let received_at = time::now_local();

    let event = match NormalizedEvent::from_payload(&payload, received_at) {
        Ok(event) => event,
        Err(err) => {
            state
                .event_log
                .push(LoggedEvent::invalid(&payload, received_at));
            return Err(err);
        }
    };

    // 未放行的事件只进日志，不计入考勤
    if !event.outcome.is_granted() {
        tracing::debug!(
            person_id = %event.person_id,
            outcome = event.outcome.as_str(),
            "Event skipped: access not granted"
        );
        state
            .event_log
            .push(LoggedEvent::skipped(&event, received_at));
        return Ok(Json(IngestAck::Skipped(SkippedAck::new(
            event.outcome.as_str(),
        ))));
    }

    let record = state.attendance.record(&event);

    if !state.roster.contains(&event.person_id) {
        tracing::debug!(person_id = %event.person_id, "Recorded event from identifier not on the roster");
    }

    state
        .event_log
        .push(LoggedEvent::recorded(&event, received_at));

    Ok(Json(IngestAck::Recorded(EventAck::new(&event, &record))))
}
