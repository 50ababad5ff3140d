//! Formatting helpers shared across UIs.

/// Format hours for display (e.g., "2.5h", "0h").
pub fn format_hours(hours: f64) -> String {
    if hours == 0.0 {
        "0h".to_string()
    } else if (hours - hours.round()).abs() < 0.05 {
        format!("{}h", hours.round() as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

/// Format a signed percent change (e.g., "+25.0%", "-8.3%", "0%").
pub fn format_percent_change(percent: f64) -> String {
    if percent == 0.0 {
        "0%".to_string()
    } else {
        format!("{:+.1}%", percent)
    }
}

/// Format a count against a target (e.g., "42/150").
pub fn format_progress(current: u32, target: u32) -> String {
    format!("{}/{}", current, target)
}
