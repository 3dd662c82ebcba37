//! Repository layer: parameterized statements over the relational store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL text, bind values and row mapping inside this boundary.
//!
//! # Invariants
//! - Values are always bound as parameters, never spliced into SQL text.
//! - Every statement carries its operation name as a leading SQL comment.
//! - Lookups return `Ok(None)` for absent rows; only execution failures are
//!   errors.

pub mod error;
pub mod project_repo;
pub mod statement;
pub mod task_repo;
pub mod template_repo;
pub mod user_repo;
pub mod version_repo;

pub use error::{RepoError, RepoResult};
pub use statement::Statement;
