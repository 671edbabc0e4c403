use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::build_series;
use crate::db::repository::HoursRepository;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::utils::date;
use std::path::Path;

/// Export one volunteer's monthly totals to a file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        volunteer_id,
        file,
        format,
        year,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let repo = HoursRepository::new(&cfg.database);
        let volunteer = repo.find_volunteer(*volunteer_id)?;

        let year = year.unwrap_or_else(date::current_year);
        let rows = repo.monthly_totals(volunteer.id, year)?;
        let series = build_series(year, &rows);

        match format {
            ExportFormat::Csv => write_csv(file, &series)?,
            ExportFormat::Json => write_json(file, &series)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
    }

    Ok(())
}
