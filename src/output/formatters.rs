//! Reusable formatting utilities for CLI output

use chrono::TimeDelta;

use crate::dashboard::insights::parse_timestamp;

/// Format a backend timestamp as local `YYYY-MM-DD HH:MM`.
///
/// Unparseable input is shown as-is, empty input as "N/A".
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => timestamp.to_string(),
    }
}

/// Format an amount as reported by the backend with thousands separators
///
/// # Example output
/// `₹12,500`
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Format a remaining duration as `2h 15m`, `5m` or `expired`
pub fn format_remaining(remaining: TimeDelta) -> String {
    if remaining <= TimeDelta::zero() {
        return "expired".to_string();
    }

    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else if mins > 0 {
        format!("{}m", mins)
    } else {
        format!("{}s", remaining.num_seconds())
    }
}
