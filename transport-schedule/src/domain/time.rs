//! Departure time normalization.
//!
//! Schedule sheets are typed by hand, so the same departure shows up as a
//! day fraction (`0.75`), a bare hour with a fractional part (`18.5`), a
//! 24-hour clock string (`"18:00"`), a dotted string (`"6.00pm"`) or free
//! text (`"5:30 to 6:00 PM"`). Everything recognisable is rewritten to the
//! 12-hour form `H:MM AM`; everything else passes through.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use super::Cell;

const MINUTES_PER_DAY: u32 = 24 * 60;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// A literal range such as "5:30 to 6:00 PM".
static RANGE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bto\b").expect("static regex"));

static DOTTED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})\.([0-9]{2})\s*(am|pm)$").expect("static regex")
});

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})(?:\s*(am|pm))?$").expect("static regex")
});

/// Normalize a time cell to display form.
///
/// Never fails: input that is not recognisably a time comes back as text.
///
/// # Examples
///
/// ```
/// use transport_schedule::domain::{Cell, normalize_time};
///
/// // Day fractions
/// assert_eq!(normalize_time(&Cell::Number(0.5)), "12:00 PM");
/// assert_eq!(normalize_time(&Cell::Number(0.25)), "6:00 AM");
///
/// // Bare hours with a fractional part
/// assert_eq!(normalize_time(&Cell::Number(18.5)), "6:30 PM");
///
/// // Strings
/// assert_eq!(normalize_time(&Cell::text("6.05pm")), "6:05 PM");
/// assert_eq!(normalize_time(&Cell::text("5:30 to 6:00 PM")), "5:30 to 6:00 PM");
/// assert_eq!(normalize_time(&Cell::Empty), "");
/// ```
pub fn normalize_time(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Number(v) => normalize_number(*v),
        Cell::Text(s) => normalize_text(s),
    }
}

/// Numeric cells: `[0, 1)` is a fraction of a day, `(1, 24)` an hour count.
///
/// Anything else (exactly 1, 24 and above, negatives, NaN) is not a time we
/// can place and is returned as the number's display form.
fn normalize_number(v: f64) -> String {
    if (0.0..1.0).contains(&v) {
        let minutes = (v * f64::from(MINUTES_PER_DAY)).round() as u32;
        format_clock(minutes)
    } else if v > 1.0 && v < 24.0 {
        let hour = v.trunc();
        let minute = ((v - hour) * 60.0).round();
        // A minute that rounds to 60 carries into the hour, never `:60`.
        format_clock(hour as u32 * 60 + minute as u32)
    } else {
        v.to_string()
    }
}

fn normalize_text(raw: &str) -> String {
    let s = WHITESPACE_RUN.replace_all(raw, " ").trim().to_string();

    if RANGE_WORD.is_match(&s) {
        return s;
    }

    let s = DOTTED_TIME.replace(&s, "$1:$2 $3").into_owned();

    let Some(caps) = CLOCK_TIME.captures(&s) else {
        return s;
    };

    // Both groups are 1-2 ASCII digits, so parsing cannot overflow.
    let hour: u32 = caps[1].parse().unwrap_or(u32::MAX);
    let minute: u32 = caps[2].parse().unwrap_or(u32::MAX);

    match caps.get(3) {
        Some(suffix) if (1..=12).contains(&hour) && minute < 60 => {
            format!("{hour}:{minute:02} {}", suffix.as_str().to_uppercase())
        }
        None if hour < 24 && minute < 60 => format_clock(hour * 60 + minute),
        _ => s.to_uppercase(),
    }
}

/// Format minutes since midnight as a 12-hour clock time.
///
/// Hours 0 and 12 both render as "12". A full day wraps back to midnight.
fn format_clock(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
