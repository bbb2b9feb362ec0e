use chrono::Duration;

/// Formats how long ago something happened, e.g. `3 days ago` or `1 hour ago`.
///
/// Anything under two seconds, negative durations included, is `just now`.
pub fn format_elapsed(elapsed: Duration) -> String {
    match coarse_units(elapsed) {
        Some(units) => format!("{units} ago"),
        None => "just now".to_string(),
    }
}

/// Formats a span of time, e.g. `12 minutes`. Under two seconds is `a moment`.
pub fn format_span(span: Duration) -> String {
    coarse_units(span).unwrap_or_else(|| "a moment".to_string())
}

fn coarse_units(d: Duration) -> Option<String> {
    let seconds = d.num_seconds();
    if seconds < 2 {
        return None;
    }
    if seconds < 60 {
        return Some(plural(seconds, "second"));
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return Some(plural(minutes, "minute"));
    }

    let hours = minutes / 60;
    if hours < 24 {
        return Some(plural(hours, "hour"));
    }

    let days = hours / 24;
    if days < 7 {
        return Some(plural(days, "day"));
    }

    let weeks = days / 7;
    if weeks < 4 {
        return Some(plural(weeks, "week"));
    }

    // months and years are approximations
    let months = days / 30;
    if months < 12 {
        return Some(plural(months, "month"));
    }

    Some(plural(days / 365, "year"))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}
