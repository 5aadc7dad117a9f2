//! 月度矩阵投影
//!
//! 把聚合状态投影成逐日矩阵，只读，不回写存储。
//!
//! # 行序
//!
//! 先是名单内成员（按 id 有序），之后是名单外出现过记录的标识
//! （同样按 id 有序，标记 `unknown`）。名单外的行不受组过滤影响。
//!
//! # 单元格
//!
//! 当月每一天都出现在 `days` 里；没有记录的日子是显式的 `null`。
//! 两次无事件间隔的调用产出逐字节相同的 JSON（全程 BTreeMap 有序）。

use crate::attendance::AttendanceStore;
use crate::roster::Roster;
use chrono::NaiveDate;
use shared::models::{DayCell, MemberReport, MonthMatrix, Person, YearMonth};
use std::collections::BTreeMap;

/// 生成某月的考勤矩阵
pub fn build_matrix(
    roster: &Roster,
    store: &AttendanceStore,
    group: Option<&str>,
    month: YearMonth,
) -> MonthMatrix {
    let policy = store.policy();

    let mut members: Vec<MemberReport> = roster
        .members(group)
        .map(|person| known_member(person, store, month))
        .collect();

    let mut unknown_ids: Vec<String> = store
        .identifiers()
        .into_iter()
        .filter(|id| !roster.contains(id))
        .collect();
    unknown_ids.sort();
    members.extend(unknown_ids.into_iter().map(|id| unknown_member(id, store, month)));

    MonthMatrix {
        group: group.map(String::from),
        month,
        start_time: policy.start,
        grace_minutes: policy.grace_minutes,
        members,
    }
}

fn known_member(person: &Person, store: &AttendanceStore, month: YearMonth) -> MemberReport {
    MemberReport {
        id: person.id.clone(),
        name: person.name.clone(),
        group: Some(person.group.clone()),
        unknown: false,
        days: month_days(&person.id, store, month),
    }
}

fn unknown_member(id: String, store: &AttendanceStore, month: YearMonth) -> MemberReport {
    let days = month_days(&id, store, month);
    MemberReport {
        name: id.clone(),
        id,
        group: None,
        unknown: true,
        days,
    }
}

/// 当月每一天映射到单元格；无记录为 `None`
fn month_days(
    person_id: &str,
    store: &AttendanceStore,
    month: YearMonth,
) -> BTreeMap<NaiveDate, Option<DayCell>> {
    let records = store.days_in_month(person_id, month);
    month
        .days()
        .map(|date| (date, records.get(&date).map(DayCell::from)))
        .collect()
}
