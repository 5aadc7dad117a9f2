//! 考勤聚合存储
//!
//! 内存中的进程级状态：每人每天一条 [`DayRecord`]，按需创建，进程结束即
//! 消失（重启后从空状态重新累积）。
//!
//! # 并发模型
//!
//! 服务器运行在多线程 tokio 运行时上，同一人员的事件可能并发到达。
//! DashMap 的 entry 锁在整个合并期间持有，因此同一人员的合并严格串行，
//! first_in/last_in 的最早/最晚语义不会被交错写破坏。不同人员互不阻塞。

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::models::{DayRecord, LatePolicy, NormalizedEvent, YearMonth};
use std::collections::BTreeMap;

/// 按人员分桶的考勤状态
#[derive(Debug)]
pub struct AttendanceStore {
    policy: LatePolicy,
    days: DashMap<String, BTreeMap<NaiveDate, DayRecord>>,
}

impl AttendanceStore {
    pub fn new(policy: LatePolicy) -> Self {
        Self {
            policy,
            days: DashMap::new(),
        }
    }

    pub fn policy(&self) -> LatePolicy {
        self.policy
    }

    /// 合并一条已通过校验的 granted 事件，返回合并后的当日快照
    ///
    /// 整个合并在 entry 锁内完成
    pub fn record(&self, event: &NormalizedEvent) -> DayRecord {
        let mut person_days = self.days.entry(event.person_id.clone()).or_default();
        let record = person_days
            .entry(event.date)
            .or_insert_with(|| DayRecord::seed(event.time));
        record.fold(event.time, &event.raw, &self.policy);
        record.clone()
    }

    /// 某人某天的记录快照
    pub fn day(&self, person_id: &str, date: NaiveDate) -> Option<DayRecord> {
        self.days
            .get(person_id)
            .and_then(|days| days.get(&date).cloned())
    }

    /// 某人某月的全部记录快照，按日期有序
    pub fn days_in_month(&self, person_id: &str, month: YearMonth) -> BTreeMap<NaiveDate, DayRecord> {
        self.days
            .get(person_id)
            .map(|days| {
                days.iter()
                    .filter(|(date, _)| month.contains(**date))
                    .map(|(date, record)| (*date, record.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 出现过记录的全部人员标识
    pub fn identifiers(&self) -> Vec<String> {
        self.days.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::ClockTime;
    use std::sync::Arc;

    fn ct(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    fn store() -> AttendanceStore {
        AttendanceStore::new(LatePolicy::new(ct(9, 0), 5))
    }

    fn granted(person_id: &str, date: (i32, u32, u32), time: (u8, u8)) -> NormalizedEvent {
        NormalizedEvent {
            person_id: person_id.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: ct(time.0, time.1),
            outcome: shared::models::EventOutcome::Granted,
            raw: json!({"identifier": person_id}),
        }
    }

    #[test]
    fn test_single_event() {
        let store = store();
        let record = store.record(&granted("105", (2026, 2, 3), (9, 10)));

        assert!(record.present);
        assert!(record.late);
        assert_eq!(record.first_in, ct(9, 10));
        assert_eq!(record.count, 1);
        assert_eq!(store.identifiers(), ["105"]);
    }

    #[test]
    fn test_out_of_order_merge() {
        let store = store();
        store.record(&granted("105", (2026, 2, 3), (9, 10)));
        let record = store.record(&granted("105", (2026, 2, 3), (8, 55)));

        assert_eq!(record.first_in, ct(8, 55));
        assert_eq!(record.last_in, ct(9, 10));
        assert!(!record.late);
        assert_eq!(record.count, 2);
    }

    #[test]
    fn test_first_last_late_are_order_independent() {
        let times = [(9, 6), (8, 40), (18, 3), (12, 0)];

        let mut permutations: Vec<Vec<(u8, u8)>> = vec![times.to_vec()];
        permutations.push(times.iter().rev().copied().collect());
        permutations.push(vec![times[2], times[0], times[3], times[1]]);

        let mut outcomes = Vec::new();
        for order in permutations {
            let store = store();
            let mut last = None;
            for (h, m) in order {
                last = Some(store.record(&granted("105", (2026, 2, 3), (h, m))));
            }
            let record = last.unwrap();
            outcomes.push((record.first_in, record.last_in, record.late, record.count));
        }

        for outcome in &outcomes {
            assert_eq!(*outcome, (ct(8, 40), ct(18, 3), false, 4));
        }
    }

    #[test]
    fn test_days_and_people_are_isolated() {
        let store = store();
        store.record(&granted("101", (2026, 2, 3), (8, 50)));
        store.record(&granted("101", (2026, 2, 4), (9, 30)));
        store.record(&granted("102", (2026, 2, 3), (9, 0)));

        assert!(!store.day("101", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()).unwrap().late);
        assert!(store.day("101", NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()).unwrap().late);
        assert_eq!(store.day("102", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()).unwrap().count, 1);
        assert!(store.day("102", NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()).is_none());
    }

    #[test]
    fn test_days_in_month_filters_and_sorts() {
        let store = store();
        store.record(&granted("101", (2026, 2, 20), (9, 0)));
        store.record(&granted("101", (2026, 2, 4), (9, 0)));
        store.record(&granted("101", (2026, 3, 1), (9, 0)));

        let month = YearMonth::new(2026, 2).unwrap();
        let days: Vec<_> = store.days_in_month("101", month).into_keys().collect();
        assert_eq!(
            days,
            [
                NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
                NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
            ]
        );
    }

    #[test]
    fn test_concurrent_merges_for_one_person() {
        let store = Arc::new(store());
        let minutes: Vec<u8> = (0..32).collect();

        let handles: Vec<_> = minutes
            .iter()
            .map(|&minute| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.record(&granted("105", (2026, 2, 3), (10, minute)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let record = store.day("105", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()).unwrap();
        assert_eq!(record.count, 32);
        assert_eq!(record.first_in, ct(10, 0));
        assert_eq!(record.last_in, ct(10, 31));
        assert!(record.late);
    }
}
