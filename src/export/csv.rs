use crate::models::monthly_point::HoursSeries;
use csv::Writer;

/// Write the monthly series as CSV, one row per charted month.
pub fn write_csv(path: &str, series: &HoursSeries) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["year", "month", "label", "total_hours"])?;

    for point in &series.points {
        wtr.write_record(&[
            series.name.clone(),
            point.month.to_string(),
            point.label.clone(),
            point.total_hours.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
