//! Data models
//!
//! Protocol and domain types shared between the server and anything else
//! that speaks its wire format (agents, dashboards).

pub mod clock;
pub mod day;
pub mod event;
pub mod month;
pub mod person;
pub mod report;

// Re-exports
pub use clock::*;
pub use day::*;
pub use event::*;
pub use month::*;
pub use person::*;
pub use report::*;
