//! Terminal rendering of a monthly hours series as a horizontal bar chart.

use crate::models::monthly_point::HoursSeries;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::formatting::pad_right;

const BAR_CHAR: char = '▇';

/// Width of the widest month name ("September").
const LABEL_WIDTH: usize = 9;

/// Render the series, one line per month with at least one entry.
/// Months without entries are simply not drawn.
pub fn render_series(series: &HoursSeries, max_bar_width: usize) -> String {
    let mut out = String::new();

    if series.is_empty() {
        out.push_str(&format!(
            "{GREY}No hours logged for {}.{RESET}\n",
            series.name
        ));
        return out;
    }

    out.push_str(&format!(
        "{CYAN}Hours logged in {}{RESET}\n\n",
        series.name
    ));

    let max_total = series
        .points
        .iter()
        .map(|p| p.total_hours)
        .max()
        .unwrap_or(1)
        .max(1);

    for point in &series.points {
        // Scale the bar to the busiest month; a non-zero total always
        // draws at least one cell.
        let mut bar_len =
            ((point.total_hours as f64 / max_total as f64) * max_bar_width as f64) as usize;
        if point.total_hours > 0 && bar_len == 0 {
            bar_len = 1;
        }

        let bar: String = std::iter::repeat(BAR_CHAR).take(bar_len).collect();

        out.push_str(&format!(
            "{}  {GREEN}{}{RESET} {}\n",
            pad_right(&point.label, LABEL_WIDTH),
            bar,
            point.total_hours
        ));
    }

    out.push_str(&format!("\nTotal: {} hours\n", series.total()));
    out
}
