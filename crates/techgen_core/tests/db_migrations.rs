use rusqlite::Connection;
use techgen_core::db::migrations::latest_version;
use techgen_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in ["usr", "project", "template", "template_version", "task"] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let err = conn
        .execute("INSERT INTO project (name, author_id) VALUES ('orphan', 404)", [])
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn reopening_file_database_keeps_schema_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("techgen.sqlite3");

    let first = open_db(&path).unwrap();
    first
        .execute(
            "INSERT INTO usr (name, email) VALUES ('ann', 'ann@example.com')",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let users: i64 = second
        .query_row("SELECT COUNT(*) FROM usr", [], |row| row.get(0))
        .unwrap();
    assert_eq!(users, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deleting_project_cascades_to_templates_versions_and_tasks() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO usr (id, name, email) VALUES (1, 'ann', 'ann@example.com');
         INSERT INTO project (id, name, author_id) VALUES (10, 'alpha', 1);
         INSERT INTO template (id, project_id, author_id) VALUES (20, 10, 1);
         INSERT INTO template_version (id, template_id, number, author_id) VALUES (30, 20, 1, 1);
         INSERT INTO task (version_id, creator_id) VALUES (30, 1);
         DELETE FROM project WHERE id = 10;",
    )
    .unwrap();

    for table in ["template", "template_version", "task"] {
        let rows: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(rows, 0, "{table} rows survived project delete");
    }
}

#[test]
fn task_status_admits_worker_states_and_rejects_unknown() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO usr (id, name, email) VALUES (1, 'ann', 'ann@example.com');
         INSERT INTO project (id, name, author_id) VALUES (10, 'alpha', 1);
         INSERT INTO template (id, project_id, author_id) VALUES (20, 10, 1);
         INSERT INTO template_version (id, template_id, number, author_id) VALUES (30, 20, 1, 1);",
    )
    .unwrap();

    let insert = |status: &str| {
        conn.execute(
            "INSERT INTO task (version_id, creator_id, status) VALUES (30, 1, ?1)",
            [status],
        )
    };
    for status in ["created", "in_progress", "succeed", "failed"] {
        insert(status).unwrap();
    }
    assert!(insert("paused").is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
