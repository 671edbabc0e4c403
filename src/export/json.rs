use crate::models::monthly_point::HoursSeries;

/// Write the monthly series as pretty-printed JSON.
pub fn write_json(path: &str, series: &HoursSeries) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(series)
        .map_err(|e| std::io::Error::other(format!("serialization failed: {e}")))?;
    std::fs::write(path, json)
}
