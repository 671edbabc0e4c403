use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::build_series;
use crate::core::chart::render_series;
use crate::db::repository::HoursRepository;
use crate::errors::AppResult;
use crate::utils::date;

/// Render the monthly hours chart for one volunteer and one year.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart {
        volunteer_id,
        year,
    } = cmd
    {
        let repo = HoursRepository::new(&cfg.database);
        let volunteer = repo.find_volunteer(*volunteer_id)?;

        let year = year.unwrap_or_else(date::current_year);
        let rows = repo.monthly_totals(volunteer.id, year)?;
        let series = build_series(year, &rows);

        println!("📅 {} ({})", volunteer.display_name(), series.name);
        println!();
        print!("{}", render_series(&series, cfg.chart_width));
    }

    Ok(())
}
