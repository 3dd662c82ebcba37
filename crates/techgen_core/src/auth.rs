//! Ownership-based authorization rule.
//!
//! # Responsibility
//! - Decide whether an actor may act on a resource from resolved owners.
//!
//! # Invariants
//! - Authorization is ownership equality only: no roles, no groups.
//! - A resource is accessible by its own author, or by the author of its
//!   parent project when one exists.

use crate::model::project::Project;
use crate::model::template::Template;
use crate::model::version::VersionOwners;
use crate::model::ActorId;

/// Owners resolved from storage for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub author_id: ActorId,
    pub parent_author_id: Option<ActorId>,
}

impl Ownership {
    /// Single-level ownership (no parent).
    pub fn direct(author_id: ActorId) -> Self {
        Self {
            author_id,
            parent_author_id: None,
        }
    }

    /// Two-level ownership inherited from a parent owner, if any.
    pub fn inherited(author_id: ActorId, parent_author_id: Option<ActorId>) -> Self {
        Self {
            author_id,
            parent_author_id,
        }
    }

    pub fn permits(&self, actor_id: ActorId) -> bool {
        is_authorized(actor_id, self.author_id, self.parent_author_id)
    }
}

/// Returns true iff `actor_id` owns the resource directly or through its
/// parent.
pub fn is_authorized(
    actor_id: ActorId,
    resource_author_id: ActorId,
    parent_author_id: Option<ActorId>,
) -> bool {
    actor_id == resource_author_id || parent_author_id == Some(actor_id)
}

/// Resource whose owners are known once it is resolved from storage.
pub trait Owned {
    fn ownership(&self) -> Ownership;
}

impl Owned for Project {
    fn ownership(&self) -> Ownership {
        Ownership::direct(self.author_id)
    }
}

impl Owned for Template {
    fn ownership(&self) -> Ownership {
        Ownership::inherited(self.author_id, self.project_author_id)
    }
}

impl Owned for VersionOwners {
    fn ownership(&self) -> Ownership {
        Ownership::inherited(self.template_author_id, self.project_author_id)
    }
}
