//! Common display utilities and helpers

/// Placeholder for absent values
pub const EMPTY: &str = "--";

/// Truncate string to `max_chars` characters with ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Show an optional string or the placeholder
pub fn or_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY.to_string(),
    }
}
