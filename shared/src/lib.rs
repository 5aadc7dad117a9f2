//! Shared types for the attendance service
//!
//! Wire models and the unified error system, kept in their own crate so
//! future agent and dashboard crates can depend on the protocol without
//! pulling in the server.

pub mod error;
pub mod models;
