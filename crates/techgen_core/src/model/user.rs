//! User domain model.

use crate::model::ActorId;
use serde::Serialize;

/// Registered user. Read-only in this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: ActorId,
    pub name: String,
    pub email: String,
    /// Epoch ms.
    pub created_at: i64,
}
