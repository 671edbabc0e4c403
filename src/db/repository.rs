//! Persistence boundary for the hours-logging core.
//!
//! Every method opens its own connection and drops it before returning:
//! acquire, execute, release. No connection is reused across calls, so a
//! failed call can never leak a handle into the next one.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::hours_entry::HoursEntry;
use crate::models::volunteer::Volunteer;

pub struct HoursRepository {
    database: String,
}

impl HoursRepository {
    pub fn new(database: &str) -> Self {
        Self {
            database: database.to_string(),
        }
    }

    /// Persist one validated entry. Atomic per call; never retried.
    pub fn save(&self, entry: &HoursEntry) -> AppResult<()> {
        let pool = DbPool::new(&self.database)?;

        queries::insert_hours_entry(&pool.conn, entry)?;

        ttlog(
            &pool.conn,
            "log_hours",
            &entry.volunteer_id.to_string(),
            &format!("{} hours on {}", entry.hours_worked, entry.date_str()),
        )?;

        Ok(())
    }

    /// Raw monthly rows for one volunteer/year, ordered by month number.
    pub fn monthly_totals(&self, volunteer_id: i32, year: i32) -> AppResult<Vec<(u32, i64)>> {
        let pool = DbPool::new(&self.database)?;
        queries::monthly_totals(&pool.conn, volunteer_id, year)
    }

    pub fn find_volunteer(&self, id: i32) -> AppResult<Volunteer> {
        let pool = DbPool::new(&self.database)?;
        queries::find_volunteer(&pool.conn, id)?.ok_or(AppError::VolunteerNotFound(id))
    }
}
