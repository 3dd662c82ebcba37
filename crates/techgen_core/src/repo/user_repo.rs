//! User repository contract and SQLite implementation.

use crate::context::RequestContext;
use crate::model::user::User;
use crate::model::ActorId;
use crate::repo::error::RepoResult;
use crate::repo::statement::Statement;
use rusqlite::Connection;

/// Repository interface for user lookups.
pub trait UserRepository {
    fn get_by_id(&self, ctx: &RequestContext, id: ActorId) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn get_by_id(&self, ctx: &RequestContext, id: ActorId) -> RepoResult<Option<User>> {
        Statement::new(
            "usr - get by id",
            "SELECT id, name, email, created_at FROM usr WHERE id = ?1",
        )
        .bind(id)
        .query_optional(ctx, self.conn, |row| {
            Ok(User {
                id: row.get("id")?,
                name: row.get("name")?,
                email: row.get("email")?,
                created_at: row.get("created_at")?,
            })
        })
    }
}
