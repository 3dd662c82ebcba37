//! Domain model for the project/template/version hierarchy.
//!
//! # Responsibility
//! - Define typed inputs and outputs for every use-case.
//! - Define the validation and domain error taxonomy surfaced to clients.
//!
//! # Invariants
//! - All identifiers are 64-bit integers assigned by storage.
//! - Timestamps are Unix epoch milliseconds.

pub mod error;
pub mod project;
pub mod task;
pub mod template;
pub mod user;
pub mod version;

/// Identifier of the authenticated caller.
///
/// Supplied by the boundary for every request; never persisted by the core.
pub type ActorId = i64;
