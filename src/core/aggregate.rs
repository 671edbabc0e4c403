//! Reduce raw monthly rows into the chart's point sequence.

use crate::models::monthly_point::{HoursSeries, MonthlyPoint};
use crate::utils::date::month_name;

/// Build the series for one calendar year from `(month, total)` rows.
///
/// Points are sorted by month number ascending regardless of the order the
/// rows arrive in; the display label is the month name. The series name is
/// the year, matching what the chart shows as the series legend.
pub fn build_series(year: i32, rows: &[(u32, i64)]) -> HoursSeries {
    let mut points: Vec<MonthlyPoint> = rows
        .iter()
        .map(|&(month, total_hours)| MonthlyPoint {
            month,
            label: month_name(month).to_string(),
            total_hours,
        })
        .collect();

    points.sort_by_key(|p| p.month);

    HoursSeries {
        name: year.to_string(),
        points,
    }
}
