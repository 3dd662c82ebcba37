//! Project domain model.
//!
//! # Responsibility
//! - Define project records and the create/delete/list inputs.
//! - Provide synchronous field validation that runs before any I/O.
//!
//! # Invariants
//! - A project name is never empty.
//! - A project is deleted only by its author; it is never updated.

use crate::model::error::{ValidationError, ValidationReason};
use crate::model::ActorId;
use serde::Serialize;

/// Storage-assigned project identifier.
pub type ProjectId = i64;

/// Persisted project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub author_id: ActorId,
}

/// Project about to be inserted; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub author_id: ActorId,
}

/// Input of the create-project use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCreateIn {
    pub name: String,
    pub author_id: ActorId,
}

impl ProjectCreateIn {
    /// Checks field-level rules.
    ///
    /// # Errors
    /// - `name` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::new("name", ValidationReason::ValueEmpty));
        }
        Ok(())
    }

    pub fn into_project(self) -> NewProject {
        NewProject {
            name: self.name,
            author_id: self.author_id,
        }
    }
}

/// Input of the delete-project use-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDeleteIn {
    pub project_id: ProjectId,
    pub user_id: ActorId,
}

/// Filter applied to project listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub user_id: ActorId,
    /// Case-sensitive substring match on `name` when set.
    pub project_name: Option<String>,
}

/// Input of the list-projects-by-user use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListIn {
    /// 1-based page number.
    pub page: i64,
    /// Page size, at least 1.
    pub size: i64,
    pub filter: ProjectListFilter,
}

impl ProjectListIn {
    /// Checks pagination bounds.
    ///
    /// # Errors
    /// - `page < 1` or `size < 1`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.page < 1 {
            return Err(ValidationError::new("page", ValidationReason::ValueInvalid));
        }
        if self.size < 1 {
            return Err(ValidationError::new("size", ValidationReason::ValueInvalid));
        }
        Ok(())
    }

    /// Row offset of the first item on the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Number of pages needed for `total` rows, rounding up.
    ///
    /// Must only be called after `validate` succeeded (`size >= 1`).
    pub fn page_count(&self, total: i64) -> i64 {
        total / self.size + i64::from(total % self.size != 0)
    }
}

/// One entry of a project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
}

/// Output of the list-projects-by-user use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListOut {
    /// Sorted by `name ASC`.
    pub projects: Vec<ProjectSummary>,
    pub total_projects: i64,
    pub total_pages: i64,
}
