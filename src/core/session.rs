//! The hours-logging session: one volunteer, one operator, one chart.
//!
//! Orchestrates input validation, persistence and chart refresh. The flow
//! mirrors the form it drives: preload binds a volunteer and draws the
//! chart, save validates and persists one entry and redraws on success,
//! cancel hands control back to the caller without persisting anything.

use crate::core::aggregate;
use crate::db::repository::HoursRepository;
use crate::errors::AppResult;
use crate::models::hours_entry::HoursEntry;
use crate::models::monthly_point::HoursSeries;
use crate::models::volunteer::Volunteer;
use crate::ui::messages::error;
use crate::utils::date;
use chrono::NaiveDate;

/// The logged-in operator, passed in at construction instead of read from
/// a process-wide global. Tests fabricate one freely.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub operator: String,
    pub is_admin: bool,
}

/// Where `cancel` sends the user. Administrators return to the volunteer
/// table; everyone else lands on their own volunteer's edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelTarget {
    VolunteerTable,
    EditVolunteer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
}

/// Confirmation text shown after a successful save.
pub const MSG_HOURS_LOGGED: &str = "Hours logged";

/// Generic save-failure text. Full detail goes to the operator channel;
/// the user-visible line never carries connection strings or SQL.
pub const MSG_SAVE_FAILED: &str = "Could not save hours, please try again";

pub struct LoggingSession {
    ctx: SessionContext,
    repo: HoursRepository,
    volunteer: Option<Volunteer>,
    input_date: NaiveDate,
    status: String,
    series: HoursSeries,
    state: SessionState,
}

impl LoggingSession {
    pub fn new(ctx: SessionContext, repo: HoursRepository) -> Self {
        Self {
            ctx,
            repo,
            volunteer: None,
            input_date: date::today(),
            status: String::new(),
            series: HoursSeries::default(),
            state: SessionState::Idle,
        }
    }

    /// Bind the session to one volunteer: reset the input date to today,
    /// clear any prior message and perform one full chart refresh.
    pub fn preload(&mut self, volunteer: Volunteer) {
        self.volunteer = Some(volunteer);
        self.input_date = date::today();
        self.status.clear();

        self.refresh_series();
    }

    pub fn set_input_date(&mut self, date: NaiveDate) {
        self.input_date = date;
    }

    /// Validate and persist one entry for the current input date.
    ///
    /// On success the confirmation message is set and the chart refreshed.
    /// On any validation or persistence error the previously displayed
    /// series stays untouched and only the status line changes. Returns
    /// whether the entry was persisted.
    pub fn save(&mut self, hours: i64) -> bool {
        let Some(volunteer) = &self.volunteer else {
            self.status = "No volunteer selected".to_string();
            return false;
        };

        self.state = SessionState::Submitting;

        let outcome = HoursEntry::new(volunteer.id, self.input_date, hours)
            .and_then(|entry| self.repo.save(&entry));

        let saved = match outcome {
            Ok(()) => {
                self.status = MSG_HOURS_LOGGED.to_string();
                self.refresh_series();
                true
            }
            // Field-level message, shown verbatim. No persistence call
            // has happened for these.
            Err(e) if e.is_validation() => {
                self.status = e.to_string();
                false
            }
            Err(e) => {
                error(format!("save failed: {}", e));
                self.status = MSG_SAVE_FAILED.to_string();
                false
            }
        };

        self.state = SessionState::Idle;
        saved
    }

    /// Return the navigation target without persisting anything. Does not
    /// depend on validation state.
    pub fn cancel(&self) -> CancelTarget {
        if self.ctx.is_admin {
            CancelTarget::VolunteerTable
        } else {
            CancelTarget::EditVolunteer
        }
    }

    /// Re-derive the displayed series from persisted entries, scoped to
    /// the current calendar year. A refresh failure is logged and
    /// swallowed: the chart keeps its previous content.
    fn refresh_series(&mut self) {
        let Some(volunteer) = &self.volunteer else {
            return;
        };

        let year = date::current_year();
        match self.refreshed_series(volunteer.id, year) {
            Ok(series) => self.series = series,
            Err(e) => error(format!("chart refresh failed: {}", e)),
        }
    }

    fn refreshed_series(&self, volunteer_id: i32, year: i32) -> AppResult<HoursSeries> {
        let rows = self.repo.monthly_totals(volunteer_id, year)?;
        Ok(aggregate::build_series(year, &rows))
    }

    pub fn volunteer(&self) -> Option<&Volunteer> {
        self.volunteer.as_ref()
    }

    pub fn input_date(&self) -> NaiveDate {
        self.input_date
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn series(&self) -> &HoursSeries {
        &self.series
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn operator(&self) -> &str {
        &self.ctx.operator
    }
}
