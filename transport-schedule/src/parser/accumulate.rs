//! Single-pass accumulation of routes from classified rows.

use tracing::{debug, trace};

use crate::domain::{Metadata, RawRow, Route, ScheduleSet, normalize_time};

use super::classify::{RowKind, classify_row};
use super::columns;

/// Which timetable new routes are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Regular,
    Friday,
}

/// Which list the current route lives in, and where.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    mode: Mode,
    index: usize,
}

/// Parse a decoded sheet into the regular and Friday timetables.
///
/// Rows are read top to bottom. A route code opens a route; rows with an
/// empty code column add departures to it until the next route, header or
/// "Friday Schedule" marker. Rows that fit none of these are skipped without
/// touching the open route. The heading comes from cell A1. The last-update
/// string is left empty; callers that know it use
/// [`ScheduleSet::with_last_update`].
///
/// This never fails: malformed rows only mean fewer routes.
///
/// # Examples
///
/// ```
/// use transport_schedule::row;
/// use transport_schedule::parser::parse_schedule;
///
/// let rows = vec![
///     row!["Friday Schedule"],
///     row![],
///     row!["R1", "08:00", "Main Route", "Via X", 0.75],
///     row!["", "09:00", "", "", 0.8],
/// ];
/// let set = parse_schedule(&rows);
///
/// assert!(set.regular.is_empty());
/// let r1 = &set.friday[0];
/// assert_eq!(r1.to_dsc, vec!["8:00 AM", "9:00 AM"]);
/// assert_eq!(r1.from_dsc, vec!["6:00 PM", "7:12 PM"]);
/// ```
pub fn parse_schedule(rows: &[RawRow]) -> ScheduleSet {
    let mut regular: Vec<Route> = Vec::new();
    let mut friday: Vec<Route> = Vec::new();
    let mut mode = Mode::Regular;
    let mut current: Option<Cursor> = None;
    let mut ignored = 0usize;

    for (line, row) in rows.iter().enumerate() {
        match classify_row(row) {
            RowKind::Blank => {}
            RowKind::FridayMarker => {
                trace!(line, "Friday section starts");
                mode = Mode::Friday;
                current = None;
            }
            RowKind::Header => {
                current = None;
            }
            RowKind::RouteOpening(code) => {
                let mut route = Route::new(
                    code,
                    row.text(columns::NAME),
                    row.text(columns::DETAILS),
                    mode == Mode::Friday,
                );
                route.push_to_dsc(normalize_time(row.cell(columns::TO_DSC)));
                route.push_from_dsc(normalize_time(row.cell(columns::FROM_DSC)));

                let list = match mode {
                    Mode::Regular => &mut regular,
                    Mode::Friday => &mut friday,
                };
                list.push(route);
                current = Some(Cursor {
                    mode,
                    index: list.len() - 1,
                });
            }
            RowKind::Continuation => {
                let Some(cursor) = current else {
                    trace!(line, "continuation row with no open route, skipped");
                    ignored += 1;
                    continue;
                };
                let list = match cursor.mode {
                    Mode::Regular => &mut regular,
                    Mode::Friday => &mut friday,
                };
                if let Some(route) = list.get_mut(cursor.index) {
                    route.push_to_dsc(normalize_time(row.cell(columns::TO_DSC)));
                    route.push_from_dsc(normalize_time(row.cell(columns::FROM_DSC)));
                }
            }
            RowKind::Unrecognized => {
                trace!(line, marker = %row.text(columns::CODE), "unrecognized row, skipped");
                ignored += 1;
            }
        }
    }

    for route in regular.iter_mut().chain(friday.iter_mut()) {
        route.finish();
    }

    debug!(
        rows = rows.len(),
        regular = regular.len(),
        friday = friday.len(),
        ignored,
        "Parsed schedule"
    );

    ScheduleSet {
        regular,
        friday,
        metadata: Metadata {
            heading: extract_heading(rows),
            last_update: String::new(),
        },
    }
}

/// Text of cell A1, or empty if the sheet has no rows.
pub fn extract_heading(rows: &[RawRow]) -> String {
    rows.first()
        .map(|row| row.text(columns::CODE))
        .unwrap_or_default()
}
