use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Domain ceiling for a single entry. The CLI argument is bounded tighter
/// (0..=18) at the presentation layer; this is the hard limit.
pub const MAX_HOURS_PER_ENTRY: i64 = 24;

/// One (volunteer, date, hours) record of work performed.
///
/// Constructing an `HoursEntry` IS the validation boundary: a value that
/// exists has already passed the domain rules. Entries are inserted once
/// and never updated or deleted by the logging core; several entries may
/// share the same volunteer and date, aggregation sums them.
#[derive(Debug, Clone, Serialize)]
pub struct HoursEntry {
    pub volunteer_id: i32,
    pub date_worked: NaiveDate,  // ⇔ hours_worked.date_worked (TEXT "YYYY-MM-DD")
    pub hours_worked: i64,       // ⇔ hours_worked.hours_worked (INT, 0..=24)
    pub created_at: String,      // ⇔ hours_worked.created_at (TEXT, ISO8601)
}

impl HoursEntry {
    /// Validate a (date, hours) pair and build the entry.
    ///
    /// Pure check, no side effects. Dates in the future are accepted.
    pub fn new(volunteer_id: i32, date_worked: NaiveDate, hours_worked: i64) -> AppResult<Self> {
        if hours_worked < 0 {
            return Err(AppError::InvalidHours(format!(
                "{} (hours cannot be negative)",
                hours_worked
            )));
        }
        if hours_worked > MAX_HOURS_PER_ENTRY {
            return Err(AppError::InvalidHours(format!(
                "{} (a day has at most {} hours)",
                hours_worked, MAX_HOURS_PER_ENTRY
            )));
        }

        Ok(Self {
            volunteer_id,
            date_worked,
            hours_worked,
            created_at: Local::now().to_rfc3339(),
        })
    }

    pub fn date_str(&self) -> String {
        self.date_worked.format("%Y-%m-%d").to_string()
    }
}
