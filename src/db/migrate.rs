use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `volunteers` table.
fn create_volunteers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS volunteers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `hours_worked` table with the modern schema.
fn create_hours_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS hours_worked (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            volunteer_id INTEGER NOT NULL,
            date_worked  TEXT NOT NULL,
            hours_worked INTEGER NOT NULL CHECK(hours_worked >= 0),
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_hours_volunteer_date
            ON hours_worked(volunteer_id, date_worked);
        "#,
    )?;
    Ok(())
}

/// Check if the `hours_worked` table has a `created_at` column.
fn hours_has_created_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('hours_worked')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "created_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Early schemas stored entries without a creation timestamp.
fn migrate_add_created_at(conn: &Connection) -> Result<()> {
    let version = "20250412_0003_add_created_at";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if hours_has_created_at_column(conn)? {
        return Ok(());
    }

    // 2) Apply the migration
    conn.execute(
        "ALTER TABLE hours_worked ADD COLUMN created_at TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'created_at' column: {}", e)),
        )
    })?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added created_at to hours_worked')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'created_at' to hours_worked table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db(). Safe to re-run on an up-to-date database.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure the roster table
    create_volunteers_table(conn)?;

    // 3) Ensure the hours table, or bring an older one up to date
    if !table_exists(conn, "hours_worked")? {
        create_hours_table(conn)?;
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_hours_volunteer_date
                ON hours_worked(volunteer_id, date_worked);
            "#,
        )?;

        migrate_add_created_at(conn)?;
    }

    Ok(())
}
