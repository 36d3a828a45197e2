/// Text substituted for absent values in console output and exports.
pub const PLACEHOLDER: &str = "-";

/// Format a reading duration in seconds as `"{h}h {m}min {s}sec"`.
///
/// Negative values mean the duration is unavailable and render as
/// `"not available"`. Uses integer division; nothing is rounded.
pub fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return "not available".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{}h {}min {}sec", hours, minutes, secs)
}

/// Format an optional reading duration; `None` renders as unavailable.
pub fn format_reading_time(seconds: Option<i64>) -> String {
    format_duration(seconds.unwrap_or(-1))
}

/// Render an optional value, falling back to [`PLACEHOLDER`].
pub fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
