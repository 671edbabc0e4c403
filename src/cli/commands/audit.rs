use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit { print } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;
        AuditLogic::print_log(&mut pool)?;
    }

    Ok(())
}
