//! Schedule sheet parser.
//!
//! Turns the hand-authored grid into route records. The sheet has no fixed
//! schema: a title row, repeated column headers, routes that spill over
//! several rows, and a "Friday Schedule" marker after which every route
//! belongs to the Friday timetable. Parsing is a pure function of the rows.

mod accumulate;
mod classify;

#[cfg(test)]
mod accumulate_tests;

pub use accumulate::{extract_heading, parse_schedule};
pub use classify::{RowKind, classify_row};

/// Column positions in a schedule row.
pub mod columns {
    /// Route code or section marker.
    pub const CODE: usize = 0;
    /// Departure towards DSC.
    pub const TO_DSC: usize = 1;
    pub const NAME: usize = 2;
    pub const DETAILS: usize = 3;
    /// Departure from DSC.
    pub const FROM_DSC: usize = 4;
}
