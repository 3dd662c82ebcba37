//! Template repository contract and SQLite implementation.

use crate::context::RequestContext;
use crate::model::template::{Template, TemplateId};
use crate::repo::error::RepoResult;
use crate::repo::statement::Statement;
use rusqlite::Connection;

/// Repository interface for template lookups and removal.
pub trait TemplateRepository {
    /// Loads a template with its parent project's author resolved.
    fn get_by_id(&self, ctx: &RequestContext, id: TemplateId) -> RepoResult<Option<Template>>;
    fn delete_by_id(&self, ctx: &RequestContext, id: TemplateId) -> RepoResult<()>;
}

/// SQLite-backed template repository.
pub struct SqliteTemplateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTemplateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TemplateRepository for SqliteTemplateRepository<'_> {
    fn get_by_id(&self, ctx: &RequestContext, id: TemplateId) -> RepoResult<Option<Template>> {
        Statement::new(
            "template - get by id",
            "SELECT
                t.id,
                t.author_id,
                t.project_id,
                p.author_id AS project_author_id
            FROM template t
            LEFT JOIN project p ON p.id = t.project_id
            WHERE t.id = ?1",
        )
        .bind(id)
        .query_optional(ctx, self.conn, |row| {
            Ok(Template {
                id: row.get("id")?,
                author_id: row.get("author_id")?,
                project_id: row.get("project_id")?,
                project_author_id: row.get("project_author_id")?,
            })
        })
    }

    fn delete_by_id(&self, ctx: &RequestContext, id: TemplateId) -> RepoResult<()> {
        Statement::new("template - delete by id", "DELETE FROM template WHERE id = ?1")
            .bind(id)
            .execute(ctx, self.conn)?;
        Ok(())
    }
}
