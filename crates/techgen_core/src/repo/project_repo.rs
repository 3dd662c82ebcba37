//! Project repository contract and SQLite implementation.
//!
//! # Invariants
//! - `delete_by_id` is idempotent; callers check existence beforehand.
//! - Listing is ordered by `name ASC, id ASC` for stable pagination.

use crate::context::RequestContext;
use crate::model::project::{
    NewProject, Project, ProjectId, ProjectListFilter, ProjectListIn, ProjectSummary,
};
use crate::repo::error::RepoResult;
use crate::repo::statement::Statement;
use rusqlite::{Connection, Row};

/// Repository interface for project persistence.
pub trait ProjectRepository {
    fn create(&self, ctx: &RequestContext, project: &NewProject) -> RepoResult<ProjectId>;
    fn get_by_id(&self, ctx: &RequestContext, id: ProjectId) -> RepoResult<Option<Project>>;
    fn delete_by_id(&self, ctx: &RequestContext, id: ProjectId) -> RepoResult<()>;
    fn list_by_author_id(
        &self,
        ctx: &RequestContext,
        input: &ProjectListIn,
    ) -> RepoResult<Vec<ProjectSummary>>;
    fn total_by_author_id(
        &self,
        ctx: &RequestContext,
        filter: &ProjectListFilter,
    ) -> RepoResult<i64>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create(&self, ctx: &RequestContext, project: &NewProject) -> RepoResult<ProjectId> {
        Statement::new(
            "project - create",
            "INSERT INTO project (name, author_id) VALUES (?1, ?2)",
        )
        .bind(project.name.clone())
        .bind(project.author_id)
        .execute(ctx, self.conn)?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_by_id(&self, ctx: &RequestContext, id: ProjectId) -> RepoResult<Option<Project>> {
        Statement::new(
            "project - get by id",
            "SELECT id, name, author_id FROM project WHERE id = ?1",
        )
        .bind(id)
        .query_optional(ctx, self.conn, parse_project_row)
    }

    fn delete_by_id(&self, ctx: &RequestContext, id: ProjectId) -> RepoResult<()> {
        Statement::new("project - delete by id", "DELETE FROM project WHERE id = ?1")
            .bind(id)
            .execute(ctx, self.conn)?;
        Ok(())
    }

    fn list_by_author_id(
        &self,
        ctx: &RequestContext,
        input: &ProjectListIn,
    ) -> RepoResult<Vec<ProjectSummary>> {
        let mut stmt = filtered_statement(
            "project - list by author id",
            "SELECT id, name FROM project",
            &input.filter,
        );
        let limit = stmt.bind_next(input.size);
        let offset = stmt.bind_next(input.offset());
        stmt.push_sql(&format!(" ORDER BY name ASC, id ASC LIMIT {limit} OFFSET {offset}"));

        stmt.query_all(ctx, self.conn, |row| {
            Ok(ProjectSummary {
                id: row.get("id")?,
                name: row.get("name")?,
            })
        })
    }

    fn total_by_author_id(
        &self,
        ctx: &RequestContext,
        filter: &ProjectListFilter,
    ) -> RepoResult<i64> {
        let stmt = filtered_statement(
            "project - total by author id",
            "SELECT COUNT(*) FROM project",
            filter,
        );
        let total = stmt.query_optional(ctx, self.conn, |row| row.get::<_, i64>(0))?;
        Ok(total.unwrap_or(0))
    }
}

fn filtered_statement(
    op: &'static str,
    select: &str,
    filter: &ProjectListFilter,
) -> Statement {
    let mut stmt = Statement::new(op, format!("{select} WHERE author_id = ?1")).bind(filter.user_id);
    if let Some(name) = filter.project_name.as_deref() {
        let pattern = stmt.bind_next(name.to_string());
        stmt.push_sql(&format!(" AND instr(name, {pattern}) > 0"));
    }
    stmt
}

fn parse_project_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        author_id: row.get("author_id")?,
    })
}
