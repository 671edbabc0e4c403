use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::render_series;
use crate::core::session::LoggingSession;
use crate::db::repository::HoursRepository;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Log hours worked by a volunteer.
///
/// Drives one full logging session: bind the volunteer, save the entry for
/// the given date, then print the refreshed current-year chart. On a
/// rejected save only the status message is printed; the stored data and
/// the previously displayed series are untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        volunteer_id,
        date: date_arg,
        hours,
    } = cmd
    {
        //
        // 1. Resolve the volunteer
        //
        let repo = HoursRepository::new(&cfg.database);
        let volunteer = repo.find_volunteer(*volunteer_id)?;

        //
        // 2. Bind the session (input date defaults to today)
        //
        let mut session = LoggingSession::new(cfg.session_context(), repo);
        session.preload(volunteer);

        if let Some(raw) = date_arg {
            let d = date::parse_date(raw)
                .ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            session.set_input_date(d);
        }

        //
        // 3. Save and report
        //
        if session.save(*hours) {
            success(format!(
                "{} for {}.",
                session.status(),
                session
                    .volunteer()
                    .map(|v| v.display_name())
                    .unwrap_or_default()
            ));
            println!();
            print!("{}", render_series(session.series(), cfg.chart_width));
        } else {
            warning(session.status());
        }
    }

    Ok(())
}
