//! Template version repository contract and SQLite implementation.
//!
//! # Invariants
//! - Listings join `usr` for the author name and order by `id DESC`.
//! - An empty listing is an empty `Vec`, never an error.

use crate::context::RequestContext;
use crate::model::template::TemplateId;
use crate::model::version::{Version, VersionId, VersionOwners};
use crate::repo::error::RepoResult;
use crate::repo::statement::Statement;
use rusqlite::Connection;

/// Repository interface for template versions.
pub trait VersionRepository {
    /// Lists versions of one template, newest first.
    fn list_by_template_id(
        &self,
        ctx: &RequestContext,
        template_id: TemplateId,
    ) -> RepoResult<Vec<Version>>;
    /// Resolves the template and project owners of one version.
    fn get_owners_by_id(
        &self,
        ctx: &RequestContext,
        id: VersionId,
    ) -> RepoResult<Option<VersionOwners>>;
}

/// SQLite-backed version repository.
pub struct SqliteVersionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVersionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl VersionRepository for SqliteVersionRepository<'_> {
    fn list_by_template_id(
        &self,
        ctx: &RequestContext,
        template_id: TemplateId,
    ) -> RepoResult<Vec<Version>> {
        Statement::new(
            "template version - list by template id",
            "SELECT
                v.id,
                v.number,
                u.name AS author_name,
                v.created_at
            FROM template_version v
            JOIN usr u ON v.author_id = u.id
            WHERE v.template_id = ?1
            ORDER BY v.id DESC",
        )
        .bind(template_id)
        .query_all(ctx, self.conn, |row| {
            Ok(Version {
                id: row.get("id")?,
                number: row.get("number")?,
                author_name: row.get("author_name")?,
                created_at: row.get("created_at")?,
            })
        })
    }

    fn get_owners_by_id(
        &self,
        ctx: &RequestContext,
        id: VersionId,
    ) -> RepoResult<Option<VersionOwners>> {
        Statement::new(
            "version - get by id",
            "SELECT
                v.id,
                t.author_id AS template_author_id,
                p.author_id AS project_author_id
            FROM template_version v
            JOIN template t ON t.id = v.template_id
            LEFT JOIN project p ON p.id = t.project_id
            WHERE v.id = ?1",
        )
        .bind(id)
        .query_optional(ctx, self.conn, |row| {
            Ok(VersionOwners {
                id: row.get("id")?,
                template_author_id: row.get("template_author_id")?,
                project_author_id: row.get("project_author_id")?,
            })
        })
    }
}
