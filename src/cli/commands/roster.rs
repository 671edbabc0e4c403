use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_volunteers;
use crate::errors::AppResult;
use crate::utils::formatting::pad_left;

/// Plain id/name listing of enrolled volunteers.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    let volunteers = list_volunteers(&pool.conn)?;

    if volunteers.is_empty() {
        println!("No volunteers enrolled yet.");
        return Ok(());
    }

    println!("👥 Enrolled volunteers:\n");
    for v in volunteers {
        println!(
            "{}  {}, {}",
            pad_left(&v.id.to_string(), 4),
            v.last_name,
            v.first_name
        );
    }

    Ok(())
}
