//! Use-case services (orchestration tier).
//!
//! # Responsibility
//! - Sequence validation, lookup, authorization, mutation and output
//!   assembly for each operation.
//! - Turn repository absence (`Ok(None)`) into domain errors.
//!
//! # Invariants
//! - Validation runs before any repository access.
//! - Authorization runs before any mutation.
//! - Collaborator failures are wrapped with a step tag and never retried.

pub mod error;
pub mod project_service;
pub mod task_service;
pub mod template_service;
pub mod user_service;
pub mod version_service;

use crate::auth::Owned;
use crate::model::error::DomainError;
use crate::model::ActorId;
use crate::repo::RepoResult;
use error::{ServiceError, ServiceResult};

/// Lookup step plus the domain errors raised when it fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AccessRule {
    /// Step tag for repository failures, e.g. `project repo - get by id`.
    pub step: &'static str,
    pub not_found: DomainError,
    pub forbidden: DomainError,
}

/// Resolves a resource and checks the actor owns it.
///
/// `resolve` is the entity-specific lookup; the control flow is shared by
/// every resolve -> authorize -> act operation.
pub(crate) fn resolve_authorized<T: Owned>(
    actor_id: ActorId,
    rule: AccessRule,
    resolve: impl FnOnce() -> RepoResult<Option<T>>,
) -> ServiceResult<T> {
    let resource = resolve()
        .map_err(ServiceError::repo(rule.step))?
        .ok_or(ServiceError::Domain(rule.not_found))?;

    if !resource.ownership().permits(actor_id) {
        return Err(ServiceError::Domain(rule.forbidden));
    }

    Ok(resource)
}
