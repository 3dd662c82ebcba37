//! Generation task domain model.
//!
//! # Invariants
//! - Tasks are inserted with status `created`; processing happens elsewhere.
//! - Every inserted task is announced with one task-created message.

use crate::model::version::VersionId;
use crate::model::ActorId;
use std::collections::BTreeMap;

/// Storage-assigned task identifier. Also the task-created message body.
pub type TaskId = i64;

/// Task state written to `task.status` by this core.
///
/// Later states (`in_progress`, `succeed`, `failed`) are set by the task
/// worker and only constrained by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Created,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
        }
    }
}

/// Input of the create-task use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreateIn {
    pub version_id: VersionId,
    pub creator_id: ActorId,
    /// Variable values keyed by variable name; stored as a JSON object.
    pub payload: BTreeMap<String, String>,
}
