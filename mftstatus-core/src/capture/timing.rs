use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

/// Parses a publish time from the capture log as RFC 3339.
///
/// A space between date and time, or a missing zone, is rejected.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    // chrono also accepts a space separator.
    if !matches!(raw.as_bytes().get(10).copied(), Some(b'T' | b't')) {
        return None;
    }
    DateTime::parse_from_rfc3339(raw).ok()
}

/// Time between `start` and `end`, zero when either cannot be parsed.
pub fn elapsed(start: &str, end: &str) -> TimeDelta {
    match (parse_timestamp(start), parse_timestamp(end)) {
        (Some(start), Some(end)) => end.with_timezone(&Utc) - start.with_timezone(&Utc),
        _ => {
            tracing::debug!(start, end, "unparseable timestamps; elapsed time set to zero");
            TimeDelta::zero()
        }
    }
}

/// Compact duration text: `0s`, `250ms`, `1.5s`, `2m3s`, `1h0m5s`.
pub fn format_elapsed(delta: TimeDelta) -> String {
    let ms = delta.num_milliseconds();
    if ms == 0 {
        return "0s".to_string();
    }

    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    if ms < 1_000 {
        return format!("{sign}{ms}ms");
    }

    let hours = ms / 3_600_000;
    let minutes = (ms / 60_000) % 60;
    let seconds = format_seconds(ms % 60_000);

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}")
    } else {
        format!("{sign}{seconds}")
    }
}

fn format_seconds(ms: u64) -> String {
    let whole = ms / 1_000;
    let frac = ms % 1_000;
    if frac == 0 {
        format!("{whole}s")
    } else {
        let frac = format!("{frac:03}");
        format!("{whole}.{}s", frac.trim_end_matches('0'))
    }
}

/// Elapsed text for a completion; `0s` when the start time was not logged.
pub fn completion_elapsed(actual_start_time: &str, completion_time: &str) -> String {
    if actual_start_time.trim().is_empty() {
        return format_elapsed(TimeDelta::zero());
    }
    format_elapsed(elapsed(actual_start_time, completion_time))
}
