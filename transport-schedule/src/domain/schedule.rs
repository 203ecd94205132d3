//! The parsed schedule: both partitions plus document metadata.

use serde::Serialize;

use super::Route;

/// Document-level information shown above the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Title from cell A1 of the sheet.
    pub heading: String,
    /// When the source was last modified, already formatted for display.
    pub last_update: String,
}

/// Routes split into the regular and the Friday timetable.
///
/// Which list a route sits in is decided once, by the section of the sheet
/// its opening row appeared in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSet {
    pub regular: Vec<Route>,
    pub friday: Vec<Route>,
    pub metadata: Metadata,
}

impl ScheduleSet {
    /// The Friday timetable if `friday` is set, otherwise the regular one.
    pub fn routes(&self, friday: bool) -> &[Route] {
        if friday { &self.friday } else { &self.regular }
    }

    /// Route codes of one timetable in sheet order, for a route selector.
    pub fn codes(&self, friday: bool) -> Vec<&str> {
        self.routes(friday)
            .iter()
            .map(|r| r.code.as_str())
            .collect()
    }

    /// Total number of routes across both timetables.
    pub fn len(&self) -> usize {
        self.regular.len() + self.friday.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regular.is_empty() && self.friday.is_empty()
    }

    /// Replace the last-update string.
    pub fn with_last_update(mut self, last_update: impl Into<String>) -> Self {
        self.metadata.last_update = last_update.into();
        self
    }
}
