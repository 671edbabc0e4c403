use serde::Serialize;

/// One point of the monthly chart: a month with at least one logged entry
/// and the summed hours for it. Derived on every refresh, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPoint {
    pub month: u32,
    pub label: String,
    pub total_hours: i64,
}

/// The ordered monthly totals for one volunteer in one calendar year.
/// Replaces the previously displayed series in full on every refresh.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HoursSeries {
    pub name: String,
    pub points: Vec<MonthlyPoint>,
}

impl HoursSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all point totals. Equals the sum of hours across every
    /// persisted entry for the volunteer/year the series was built from.
    pub fn total(&self) -> i64 {
        self.points.iter().map(|p| p.total_hours).sum()
    }
}
