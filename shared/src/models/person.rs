//! Roster entry model

use serde::{Deserialize, Serialize};

/// One person on the fixed roster
///
/// Loaded once at startup and immutable afterwards. `id` is the access
/// terminal identifier (badge/employee number), kept as a string because
/// terminals disagree on whether it is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub group: String,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
        }
    }
}
