//! Template version domain model.
//!
//! # Invariants
//! - Versions are append-only and never mutated after creation.
//! - Listings are ordered by descending `id` (newest first).

use crate::model::template::TemplateId;
use crate::model::ActorId;
use serde::Serialize;

/// Storage-assigned version identifier.
pub type VersionId = i64;

/// One version of a template as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub id: VersionId,
    pub number: i64,
    /// Name of the creating user, denormalized at read time.
    pub author_name: String,
    /// Epoch ms.
    pub created_at: i64,
}

/// Owners a version inherits from its template and project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionOwners {
    pub id: VersionId,
    pub template_author_id: ActorId,
    pub project_author_id: Option<ActorId>,
}

/// Input of the version listing use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionListIn {
    pub template_id: TemplateId,
    pub user_id: ActorId,
}

/// Output of the version listing use-cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionListOut {
    pub versions: Vec<Version>,
}
