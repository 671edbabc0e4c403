use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_volunteer;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a new volunteer in the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Enroll {
        first_name,
        last_name,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let id = insert_volunteer(&pool.conn, first_name, last_name)?;

        ttlog(
            &pool.conn,
            "enroll",
            &id.to_string(),
            &format!("Enrolled {} {}", first_name, last_name),
        )?;

        success(format!(
            "Enrolled {} {} (id {}).",
            first_name, last_name, id
        ));
    }

    Ok(())
}
