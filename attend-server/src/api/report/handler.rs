//! Report API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::error::{AppError, AppResult};
use shared::models::{MonthMatrix, YearMonth};

use crate::attendance::build_matrix;
use crate::core::ServerState;
use crate::utils::time;

/// 报表查询参数
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// 组别过滤，空字符串等同于未提供
    pub group: Option<String>,
    /// 月份 (YYYY-MM)，默认当前月
    pub month: Option<String>,
}

/// GET /report - 月度考勤矩阵
///
/// 返回花名册全部成员（或 `group` 过滤后的成员）在指定月份
/// 每一天的出勤格子，没打过卡的天是 `null`。
pub async fn month_report(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<MonthMatrix>> {
    let month = match query.month.as_deref() {
        Some(raw) => raw.parse::<YearMonth>().map_err(|_| {
            AppError::validation(format!("month must be YYYY-MM, got {raw}"))
                .with_detail("param", "month")
        })?,
        None => time::current_month(),
    };

    let group = query.group.as_deref().filter(|g| !g.is_empty());
    let matrix = build_matrix(&state.roster, &state.attendance, group, month);

    Ok(Json(matrix))
}
