//! Template domain model.

use crate::model::project::ProjectId;
use crate::model::ActorId;

/// Storage-assigned template identifier.
pub type TemplateId = i64;

/// Template row with the owner of its parent project resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub author_id: ActorId,
    /// `None` for templates not attached to a project.
    pub project_id: Option<ProjectId>,
    /// Author of the parent project, denormalized at read time.
    pub project_author_id: Option<ActorId>,
}

/// Input of the delete-template use-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDeleteIn {
    pub template_id: TemplateId,
    pub user_id: ActorId,
}
