use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) VOLUNTEERS AND ENTRIES
    //
    let volunteers: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM volunteers", [], |row| row.get(0))?;
    println!(
        "{}• Volunteers:{} {}{}{}",
        CYAN, RESET, GREEN, volunteers, RESET
    );

    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM hours_worked", [], |row| row.get(0))?;
    println!(
        "{}• Hours entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );

    let total_hours: i64 = pool
        .conn
        .query_row(
            "SELECT IFNULL(SUM(hours_worked), 0) FROM hours_worked",
            [],
            |row| row.get(0),
        )?;
    println!("{}• Total hours:{} {}", CYAN, RESET, total_hours);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date_worked FROM hours_worked ORDER BY date_worked ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date_worked FROM hours_worked ORDER BY date_worked DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
