//! 12-hour clock labels, the format every reminder time is shown in.
//!
//! `format_12h(17, 5)` → `5:05 PM`. The hour is never zero-padded, minutes always are.

use chrono::{NaiveTime, Timelike};

/// Renders an hour (`0..=23`) and minute (`0..=59`) as `H:MM AM|PM`.
///
/// # Examples
///
/// ```
/// # use nudge_core::clock::format_12h;
/// assert_eq!(format_12h(0, 0), "12:00 AM");
/// assert_eq!(format_12h(9, 5), "9:05 AM");
/// assert_eq!(format_12h(12, 30), "12:30 PM");
/// assert_eq!(format_12h(23, 59), "11:59 PM");
/// ```
pub fn format_12h(hour: u32, minute: u32) -> String {
    match hour {
        0 => format!("12:{minute:02} AM"),
        1..=11 => format!("{hour}:{minute:02} AM"),
        12 => format!("12:{minute:02} PM"),
        _ => format!("{}:{minute:02} PM", hour - 12),
    }
}

/// [`format_12h`] for a `NaiveTime`; seconds are dropped.
pub fn format_time(time: NaiveTime) -> String {
    format_12h(time.hour(), time.minute())
}

/// Parses a clock label back into a `NaiveTime`.
///
/// Accepts the `H:MM AM` labels produced by [`format_12h`] (also zero-padded, as in
/// `09:00 AM`, and without the space) and plain 24-hour `HH:MM`.
pub fn parse_12h(label: &str) -> Option<NaiveTime> {
    let s = label.trim().to_ascii_lowercase();
    let (core, is_pm) = if let Some(core) = s.strip_suffix("pm") {
        (core.trim_end(), Some(true))
    } else if let Some(core) = s.strip_suffix("am") {
        (core.trim_end(), Some(false))
    } else {
        (s.as_str(), None)
    };

    let (h, m) = match core.split_once(':') {
        Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
        None if is_pm.is_some() => (core.parse::<u32>().ok()?, 0),
        None => return None,
    };
    if m > 59 {
        return None;
    }

    let h24 = match is_pm {
        None if h <= 23 => h,
        None => return None,
        Some(_) if h == 0 || h > 12 => return None,
        Some(false) if h == 12 => 0,
        Some(true) if h == 12 => 12,
        Some(true) => h + 12,
        Some(false) => h,
    };
    NaiveTime::from_hms_opt(h24, m, 0)
}
