use crate::errors::AppResult;
use crate::models::hours_entry::HoursEntry;
use crate::models::volunteer::Volunteer;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_volunteer_row(row: &Row) -> Result<Volunteer> {
    Ok(Volunteer {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}

/// Insert one validated entry. A single statement, atomic per call.
pub fn insert_hours_entry(conn: &Connection, entry: &HoursEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO hours_worked (volunteer_id, date_worked, hours_worked, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.volunteer_id,
            entry.date_str(),
            entry.hours_worked,
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Sum hours per month for one volunteer and one calendar year.
///
/// Returns one `(month_number, total)` row per month that has at least one
/// entry; months without entries are absent. Ordered by month number
/// ascending, not left to whatever order GROUP BY happens to produce.
pub fn monthly_totals(
    conn: &Connection,
    volunteer_id: i32,
    year: i32,
) -> AppResult<Vec<(u32, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT CAST(strftime('%m', date_worked) AS INTEGER) AS month,
                SUM(hours_worked) AS total
         FROM hours_worked
         WHERE volunteer_id = ?1
           AND CAST(strftime('%Y', date_worked) AS INTEGER) = ?2
         GROUP BY month
         ORDER BY month ASC",
    )?;

    let rows = stmt.query_map(params![volunteer_id, year], |row| {
        Ok((row.get::<_, u32>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_volunteer(conn: &Connection, first_name: &str, last_name: &str) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO volunteers (first_name, last_name) VALUES (?1, ?2)",
        params![first_name, last_name],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

pub fn find_volunteer(conn: &Connection, id: i32) -> AppResult<Option<Volunteer>> {
    let found = conn
        .query_row(
            "SELECT id, first_name, last_name FROM volunteers WHERE id = ?1",
            [id],
            map_volunteer_row,
        )
        .optional()?;
    Ok(found)
}

pub fn list_volunteers(conn: &Connection) -> AppResult<Vec<Volunteer>> {
    let mut stmt =
        conn.prepare("SELECT id, first_name, last_name FROM volunteers ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_volunteer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
