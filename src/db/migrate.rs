use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, recorded in the `log` table once applied.
const SCHEMA_V1: &str = "20260101_0001_workbook_store";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Sheets, their cells, custom properties, the selection and row styling.
fn create_workbook_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheets (
            name      TEXT PRIMARY KEY,
            position  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS cells (
            sheet  TEXT NOT NULL REFERENCES sheets(name) ON DELETE CASCADE,
            row    INTEGER NOT NULL,
            col    INTEGER NOT NULL,
            kind   TEXT NOT NULL CHECK(kind IN ('n','s','b')),
            num    REAL,
            txt    TEXT,
            PRIMARY KEY (sheet, row, col)
        );

        CREATE TABLE IF NOT EXISTS properties (
            name   TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS selection (
            id     INTEGER PRIMARY KEY CHECK(id = 1),
            sheet  TEXT NOT NULL,
            row    INTEGER
        );

        CREATE TABLE IF NOT EXISTS row_formats (
            sheet   TEXT NOT NULL,
            row     INTEGER NOT NULL,
            format  TEXT NOT NULL,
            PRIMARY KEY (sheet, row)
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if is_applied(conn, SCHEMA_V1)? {
        return Ok(());
    }

    create_workbook_tables(conn)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Created workbook store tables')",
        [SCHEMA_V1],
    )?;

    Ok(())
}
