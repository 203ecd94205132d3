//! JSON output for the filtered listing.

use serde::Serialize;

use crate::domain::{Route, ScheduleSet};
use crate::query::RouteFilter;

/// The routes on screen plus the selection that produced them.
#[derive(Debug, Serialize)]
pub struct ListingResponse<'a> {
    pub heading: &'a str,
    pub last_update: &'a str,

    /// "regular" or "friday"
    pub schedule: &'static str,

    /// Selected route code, if any
    pub route: Option<&'a str>,

    /// Lower-cased search text, if any
    pub query: Option<&'a str>,

    /// Codes available in the shown timetable
    pub codes: Vec<&'a str>,

    pub routes: Vec<&'a Route>,
}

impl<'a> ListingResponse<'a> {
    pub fn new(set: &'a ScheduleSet, show_friday: bool, filter: &'a RouteFilter) -> Self {
        Self {
            heading: &set.metadata.heading,
            last_update: &set.metadata.last_update,
            schedule: if show_friday { "friday" } else { "regular" },
            route: filter.code(),
            query: filter.query(),
            codes: set.codes(show_friday),
            routes: filter.apply(set.routes(show_friday)),
        }
    }
}
