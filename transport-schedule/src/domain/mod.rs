//! Domain types for the transport schedule.
//!
//! This module contains the cell model for decoded sheets, the route model
//! the parser produces, and normalization of departure times.

mod cell;
mod route;
mod schedule;
mod time;

pub use cell::{Cell, RawRow, SCHEDULE_COLUMNS};
pub use route::{DISPLAY_SEPARATOR, Route, RouteCode, dedup_in_order};
pub use schedule::{Metadata, ScheduleSet};
pub use time::normalize_time;
