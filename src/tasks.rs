//! Task Timing
//!
//! Duration and timestamp text shown on task rows and the home timeline.

use chrono::{DateTime, TimeZone};

use crate::models::Task;

/// `"{h}h {m}m {s}s"`, dropping zero hour/minute units. Seconds are
/// always shown.
pub fn format_duration(start: i64, end: i64) -> String {
    let total = start.abs_diff(end);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut out = String::new();
    if hours != 0 {
        out.push_str(&format!("{}h ", hours));
    }
    if minutes != 0 {
        out.push_str(&format!("{}m ", minutes));
    }
    out.push_str(&format!("{}s", seconds));
    out
}

/// Render epoch seconds in the given zone
pub fn format_timestamp<Tz: TimeZone>(epoch_secs: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(utc) => utc.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "--".to_string(),
    }
}

/// "Started @ ..." while running, "Ended @ ... (duration on builder)" after
pub fn task_timestamp<Tz: TimeZone>(task: &Task, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if task.has_ended() {
        format!(
            "Ended @ {} ({} on {})",
            format_timestamp(task.ts_ended, tz),
            format_duration(task.ts_started, task.ts_ended),
            task.allocated_builder
        )
    } else {
        format!(
            "Started @ {} on {}",
            format_timestamp(task.ts_started, tz),
            task.allocated_builder
        )
    }
}

/// Headline of a timeline event
pub fn timeline_title(task: &Task) -> String {
    if task.allocated_builder.is_empty() {
        format!("Build #{} {}", task.id, task.source_path)
    } else {
        format!("Building #{} {} on {}", task.id, task.source_path, task.allocated_builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(ts_started: i64, ts_ended: i64, builder: &str) -> Task {
        Task {
            id: 42,
            build_id: "nano".into(),
            description: String::new(),
            architecture: "x86_64".into(),
            source_path: "n/nano".into(),
            status: serde_json::json!(2),
            ts_started,
            ts_ended,
            allocated_builder: builder.into(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0, 3661), "1h 1m 1s");
        assert_eq!(format_duration(0, 59), "59s");
        assert_eq!(format_duration(0, 60), "1m 0s");
        assert_eq!(format_duration(0, 3600), "1h 0s");
        assert_eq!(format_duration(3661, 0), "1h 1m 1s");
        assert_eq!(format_duration(5, 5), "0s");
    }

    #[test]
    fn test_task_timestamp() {
        let running = task(0, 0, "b1");
        assert_eq!(task_timestamp(&running, &Utc), "Started @ 1970-01-01 00:00:00 on b1");

        let ended = task(0, 3661, "b1");
        assert_eq!(task_timestamp(&ended, &Utc), "Ended @ 1970-01-01 01:01:01 (1h 1m 1s on b1)");
    }

    #[test]
    fn test_timeline_title() {
        assert_eq!(timeline_title(&task(0, 0, "")), "Build #42 n/nano");
        assert_eq!(timeline_title(&task(0, 0, "b1")), "Building #42 n/nano on b1");
    }
}
