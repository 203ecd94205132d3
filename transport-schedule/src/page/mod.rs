//! Rendering the parsed schedule.
//!
//! The HTML page carries both timetables and a small script so the route
//! selector, search box and Friday toggle keep working in the browser. The
//! selection passed in here only decides the initial state. JSON output
//! carries just the filtered routes.

mod dto;
pub mod templates;

use askama::Template;

use crate::config::OutputFormat;
use crate::domain::ScheduleSet;
use crate::query::RouteFilter;

pub use dto::ListingResponse;
pub use templates::*;

/// Errors from rendering output.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the listing page.
pub fn render_html(
    set: &ScheduleSet,
    show_friday: bool,
    filter: &RouteFilter,
) -> Result<String, PageError> {
    Ok(ScheduleTemplate::new(set, show_friday, filter).render()?)
}

/// Render the filtered routes of one timetable as pretty-printed JSON.
pub fn render_json(
    set: &ScheduleSet,
    show_friday: bool,
    filter: &RouteFilter,
) -> Result<String, PageError> {
    Ok(serde_json::to_string_pretty(&ListingResponse::new(
        set,
        show_friday,
        filter,
    ))?)
}

/// Render in the requested format.
pub fn render(
    set: &ScheduleSet,
    format: OutputFormat,
    show_friday: bool,
    filter: &RouteFilter,
) -> Result<String, PageError> {
    match format {
        OutputFormat::Html => render_html(set, show_friday, filter),
        OutputFormat::Json => render_json(set, show_friday, filter),
    }
}
