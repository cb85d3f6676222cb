//! Driven adapters implementing the domain ports.
//!
//! - `persistence`: process-local book store
//! - `messaging`: broadcast-backed message bus

pub mod messaging;
pub mod persistence;
