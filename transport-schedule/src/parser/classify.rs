//! Row classification.
//!
//! Each row of the sheet is one of a handful of shapes. Classification
//! looks at a single row in isolation; whether a continuation row has a
//! route to continue is up to the accumulator.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{RawRow, RouteCode};

use super::columns;

static FRIDAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)friday\s*schedule").expect("static regex"));

static ROUTE_NO_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)route\s*no").expect("static regex"));

static ROUTE_DETAILS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)route\s*details").expect("static regex"));

/// The shape of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Nothing in any schedule column.
    Blank,
    /// "Friday Schedule": everything below belongs to the Friday timetable.
    FridayMarker,
    /// A repeated column header ("Route No", "Route Details").
    Header,
    /// First row of a route.
    RouteOpening(RouteCode),
    /// No code: more departures for the route above.
    Continuation,
    /// Anything else, e.g. a note in the code column.
    Unrecognized,
}

/// Classify one row.
///
/// The checks run in a fixed order: blank, Friday marker, header, route
/// code, continuation. A row that fits none of them is `Unrecognized`.
///
/// # Examples
///
/// ```
/// use transport_schedule::row;
/// use transport_schedule::parser::{RowKind, classify_row};
///
/// assert_eq!(classify_row(&row!["FRIDAY SCHEDULE"]), RowKind::FridayMarker);
/// assert_eq!(classify_row(&row!["Route No", "", "", "Route Details"]), RowKind::Header);
/// assert!(matches!(classify_row(&row!["R3", "7:00"]), RowKind::RouteOpening(_)));
/// assert_eq!(classify_row(&row!["", "7:30"]), RowKind::Continuation);
/// assert_eq!(classify_row(&row!["Note: no service on holidays"]), RowKind::Unrecognized);
/// ```
pub fn classify_row(row: &RawRow) -> RowKind {
    if row.is_blank() {
        return RowKind::Blank;
    }

    let marker = row.text(columns::CODE);

    if FRIDAY_MARKER.is_match(&marker) {
        return RowKind::FridayMarker;
    }

    if ROUTE_NO_HEADER.is_match(&marker)
        || ROUTE_DETAILS_HEADER.is_match(&row.text(columns::DETAILS))
    {
        return RowKind::Header;
    }

    if let Some(code) = RouteCode::parse(&marker) {
        return RowKind::RouteOpening(code);
    }

    if marker.is_empty() {
        RowKind::Continuation
    } else {
        RowKind::Unrecognized
    }
}
