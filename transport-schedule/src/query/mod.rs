//! Filtering parsed routes for display.
//!
//! The presentation layer owns the selected route code and the search box;
//! it passes both in on every refresh and gets back the matching routes in
//! their original order.

mod filter;

pub use filter::{RouteFilter, filter_routes};
