//! Task repository contract and SQLite implementation.

use crate::context::RequestContext;
use crate::model::task::{TaskCreateIn, TaskId, TaskStatus};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::statement::Statement;
use rusqlite::Connection;

/// Repository interface for generation tasks.
pub trait TaskRepository {
    /// Inserts a task in `created` status and returns its id.
    fn insert(&self, ctx: &RequestContext, input: &TaskCreateIn) -> RepoResult<TaskId>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert(&self, ctx: &RequestContext, input: &TaskCreateIn) -> RepoResult<TaskId> {
        const OP: &str = "task - insert";

        let payload = serde_json::to_string(&input.payload).map_err(|err| RepoError::Encode {
            op: OP,
            message: format!("payload: {err}"),
        })?;

        Statement::new(
            OP,
            "INSERT INTO task (version_id, status, payload, creator_id) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(input.version_id)
        .bind(TaskStatus::Created.as_str().to_string())
        .bind(payload)
        .bind(input.creator_id)
        .execute(ctx, self.conn)?;

        Ok(self.conn.last_insert_rowid())
    }
}
