//! Operation-tagged parameterized statements.
//!
//! # Responsibility
//! - Accumulate SQL text and positional bind values (`?1, ?2, ...`).
//! - Execute against a connection after checking the request context.
//! - Wrap every failure with the statement's operation name.
//!
//! # Invariants
//! - Placeholder numbers always match bind value positions.
//! - The executed text is `-- <op>\n<sql>`.

use crate::context::RequestContext;
use crate::repo::error::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

/// One SQL statement with its operation tag and bind values.
#[derive(Debug, Clone)]
pub struct Statement {
    op: &'static str,
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    /// Starts a statement tagged with a human-readable operation name.
    pub fn new(op: &'static str, sql: impl Into<String>) -> Self {
        Self {
            op,
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Binds the next positional value for a placeholder already in the SQL.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Binds a value and returns its placeholder for dynamic SQL fragments.
    pub fn bind_next(&mut self, value: impl Into<Value>) -> String {
        self.params.push(value.into());
        format!("?{}", self.params.len())
    }

    /// Appends raw SQL text. Callers must never splice values here.
    pub fn push_sql(&mut self, fragment: &str) {
        self.sql.push_str(fragment);
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// SQL text as sent to the store, prefixed by the operation comment.
    pub fn tagged_sql(&self) -> String {
        format!("-- {}\n{}", self.op, self.sql)
    }

    /// Executes a statement that returns no rows; yields the changed row count.
    pub fn execute(&self, ctx: &RequestContext, conn: &Connection) -> RepoResult<usize> {
        self.ensure_live(ctx)?;
        let mut stmt = conn
            .prepare(&self.tagged_sql())
            .map_err(|err| RepoError::sqlite(self.op, err))?;
        stmt.execute(params_from_iter(self.params.iter()))
            .map_err(|err| RepoError::sqlite(self.op, err))
    }

    /// Fetches at most one row; `Ok(None)` when nothing matches.
    pub fn query_optional<T>(
        &self,
        ctx: &RequestContext,
        conn: &Connection,
        map: impl FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    ) -> RepoResult<Option<T>> {
        self.ensure_live(ctx)?;
        let run = || -> rusqlite::Result<Option<T>> {
            let mut stmt = conn.prepare(&self.tagged_sql())?;
            let mut rows = stmt.query(params_from_iter(self.params.iter()))?;
            let item = match rows.next()? {
                Some(row) => Some(map(row)?),
                None => None,
            };
            Ok(item)
        };
        run().map_err(|err| RepoError::sqlite(self.op, err))
    }

    /// Fetches every row in store order; empty `Vec` when nothing matches.
    pub fn query_all<T>(
        &self,
        ctx: &RequestContext,
        conn: &Connection,
        mut map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> RepoResult<Vec<T>> {
        self.ensure_live(ctx)?;
        let mut run = || -> rusqlite::Result<Vec<T>> {
            let mut stmt = conn.prepare(&self.tagged_sql())?;
            let mut rows = stmt.query(params_from_iter(self.params.iter()))?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(map(row)?);
            }
            Ok(items)
        };
        run().map_err(|err| RepoError::sqlite(self.op, err))
    }

    fn ensure_live(&self, ctx: &RequestContext) -> RepoResult<()> {
        ctx.check().map_err(|source| RepoError::Context {
            op: self.op,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Statement;
    use crate::context::{ContextError, RequestContext};
    use crate::repo::error::RepoError;
    use rusqlite::types::Value;
    use rusqlite::Connection;

    #[test]
    fn tagged_sql_prefixes_operation_comment() {
        let stmt = Statement::new("project - get by id", "SELECT 1");
        assert_eq!(stmt.tagged_sql(), "-- project - get by id\nSELECT 1");
    }

    #[test]
    fn bind_next_numbers_placeholders_in_order() {
        let mut stmt = Statement::new("t", "SELECT 1 WHERE a = ?1").bind(10_i64);
        let placeholder = stmt.bind_next("x".to_string());
        stmt.push_sql(&format!(" AND b = {placeholder}"));
        assert_eq!(placeholder, "?2");
        assert_eq!(
            stmt.params(),
            &[Value::Integer(10), Value::Text("x".to_string())]
        );
    }

    #[test]
    fn bound_text_is_not_interpreted_as_sql() {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        conn.execute_batch("CREATE TABLE item (name TEXT NOT NULL);")
            .expect("sqlite call succeeds");
        let ctx = RequestContext::background();

        Statement::new("item - insert", "INSERT INTO item (name) VALUES (?1)")
            .bind("x'); DROP TABLE item; --".to_string())
            .execute(&ctx, &conn)
            .expect("sqlite call succeeds");

        let names = Statement::new("item - list", "SELECT name FROM item")
            .query_all(&ctx, &conn, |row| row.get::<_, String>(0))
            .expect("sqlite call succeeds");
        assert_eq!(names, vec!["x'); DROP TABLE item; --".to_string()]);
    }

    #[test]
    fn query_optional_returns_none_without_rows() {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        let found = Statement::new("empty", "SELECT 1 WHERE 0")
            .query_optional(&RequestContext::background(), &conn, |row| {
                row.get::<_, i64>(0)
            })
            .expect("sqlite call succeeds");
        assert_eq!(found, None);
    }

    #[test]
    fn query_all_feeds_every_row_to_a_stateful_mapper() {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        conn.execute_batch(
            "CREATE TABLE item (name TEXT NOT NULL);
             INSERT INTO item VALUES ('a'), ('b'), ('c');",
        )
        .expect("sqlite call succeeds");
        let mut seen = 0;

        let positions = Statement::new("item - list", "SELECT name FROM item ORDER BY name")
            .query_all(&RequestContext::background(), &conn, |row| {
                seen += 1;
                Ok((seen, row.get::<_, String>(0)?))
            })
            .expect("sqlite call succeeds");

        assert_eq!(seen, 3);
        assert_eq!(positions.last(), Some(&(3, "c".to_string())));
    }

    #[test]
    fn failures_carry_operation_tag() {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        let err = Statement::new("missing - select", "SELECT * FROM missing")
            .query_all(&RequestContext::background(), &conn, |row| {
                row.get::<_, i64>(0)
            })
            .expect_err("statement fails");
        assert_eq!(err.op(), "missing - select");
        assert!(err.to_string().starts_with("exec query \"missing - select\""));
    }

    #[test]
    fn cancelled_context_fails_before_execution() {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        conn.execute_batch("CREATE TABLE item (name TEXT NOT NULL);")
            .expect("sqlite call succeeds");
        let ctx = RequestContext::background();
        ctx.cancel();

        let err = Statement::new("item - insert", "INSERT INTO item (name) VALUES (?1)")
            .bind("a".to_string())
            .execute(&ctx, &conn)
            .expect_err("statement fails");
        assert!(matches!(
            err,
            RepoError::Context {
                source: ContextError::Cancelled,
                ..
            }
        ));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM item", [], |row| row.get(0))
            .expect("sqlite call succeeds");
        assert_eq!(count, 0);
    }
}
