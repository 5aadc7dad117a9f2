//! 花名册模块 - 固定人员名单
//!
//! 启动时从 JSON 文件加载一次，之后只读。文件缺失或损坏时记录警告并以
//! 空名单启动，服务照常运行（宽容策略：未知人员的事件仍会被记录）。
//!
//! # 文件格式
//!
//! ```json
//! [
//!   { "id": "101", "name": "Ivanov I.", "group": "A" },
//!   { "id": "103", "name": "Sidorov K.", "group": "B" }
//! ]
//! ```

use shared::models::Person;
use std::collections::BTreeMap;
use std::fs;

/// 人员名单，按 id 有序存储
#[derive(Debug, Default)]
pub struct Roster {
    people: BTreeMap<String, Person>,
}

impl Roster {
    /// 从 JSON 文件加载名单
    ///
    /// 任何读取或解析失败都降级为空名单并记录警告
    pub fn load(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Vec<Person>>(&text) {
                Ok(people) => {
                    let roster = Self::from_people(people);
                    tracing::info!(count = roster.len(), path, "roster loaded");
                    roster
                }
                Err(e) => {
                    tracing::warn!(path, error = %e, "roster file is not valid JSON, starting with an empty roster");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path, error = %e, "roster file not readable, starting with an empty roster");
                Self::default()
            }
        }
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        let mut map = BTreeMap::new();
        for person in people {
            if let Some(previous) = map.insert(person.id.clone(), person) {
                tracing::warn!(id = %previous.id, "duplicate roster id, keeping the last entry");
            }
        }
        Self { people: map }
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    /// 按 id 有序遍历成员；`group` 给定时只返回该组
    pub fn members<'a>(&'a self, group: Option<&'a str>) -> impl Iterator<Item = &'a Person> + 'a {
        self.people
            .values()
            .filter(move |person| group.map_or(true, |g| person.group == g))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Roster {
        Roster::from_people(vec![
            Person::new("103", "Sidorov K.", "B"),
            Person::new("101", "Ivanov I.", "A"),
            Person::new("105", "Smirnov I.", "A"),
        ])
    }

    #[test]
    fn test_members_sorted_by_id() {
        let roster = sample();
        let ids: Vec<_> = roster.members(None).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["101", "103", "105"]);
    }

    #[test]
    fn test_group_filter() {
        let roster = sample();
        let ids: Vec<_> = roster.members(Some("A")).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["101", "105"]);

        let none: Vec<_> = roster.members(Some("Z")).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "7", "name": "Test T.", "group": "QA"}}]"#
        )
        .unwrap();

        let roster = Roster::load(file.path().to_str().unwrap());
        assert_eq!(roster.len(), 1);
        assert!(roster.contains("7"));
        assert_eq!(roster.get("7").unwrap().name, "Test T.");
    }

    #[test]
    fn test_missing_file_gives_empty_roster() {
        let roster = Roster::load("/nonexistent/roster.json");
        assert!(roster.is_empty());
    }

    #[test]
    fn test_garbage_file_gives_empty_roster() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let roster = Roster::load(file.path().to_str().unwrap());
        assert!(roster.is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let roster = Roster::from_people(vec![
            Person::new("101", "First", "A"),
            Person::new("101", "Second", "B"),
        ]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("101").unwrap().name, "Second");
    }
}
