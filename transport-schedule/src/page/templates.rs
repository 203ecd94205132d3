//! Askama templates for the schedule page.

use askama::Template;

use crate::domain::{Route, ScheduleSet, dedup_in_order};
use crate::query::RouteFilter;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The full listing: both timetables, one of them shown.
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub heading: String,
    pub last_update: String,
    pub show_friday: bool,
    pub query: String,
    pub codes: Vec<CodeOption>,
    pub partitions: Vec<PartitionView>,
}

impl ScheduleTemplate {
    /// Build the page for a parsed schedule and the current selection.
    pub fn new(set: &ScheduleSet, show_friday: bool, filter: &RouteFilter) -> Self {
        let mut codes: Vec<String> = set
            .regular
            .iter()
            .chain(set.friday.iter())
            .map(|r| r.code.clone())
            .collect();
        dedup_in_order(&mut codes);

        let codes = codes
            .into_iter()
            .map(|code| CodeOption {
                selected: filter.code() == Some(code.as_str()),
                code,
            })
            .collect();

        Self {
            heading: set.metadata.heading.clone(),
            last_update: set.metadata.last_update.clone(),
            show_friday,
            query: filter.query().unwrap_or_default().to_string(),
            codes,
            partitions: vec![
                PartitionView::new(
                    "regular",
                    "Regular Schedule",
                    &set.regular,
                    !show_friday,
                    filter,
                ),
                PartitionView::new(
                    "friday",
                    "Friday Schedule",
                    &set.friday,
                    show_friday,
                    filter,
                ),
            ],
        }
    }

    /// The partition currently on screen.
    pub fn visible_partition(&self) -> Option<&PartitionView> {
        self.partitions.iter().find(|p| p.visible)
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// An entry in the route selector.
#[derive(Debug, Clone)]
pub struct CodeOption {
    pub code: String,
    pub selected: bool,
}

/// One timetable section.
#[derive(Debug, Clone)]
pub struct PartitionView {
    /// Element id, also read by the page script.
    pub id: &'static str,
    pub title: &'static str,
    pub visible: bool,
    pub routes: Vec<RouteView>,
    /// Routes passing the filter.
    pub matched: usize,
}

impl PartitionView {
    fn new(
        id: &'static str,
        title: &'static str,
        routes: &[Route],
        visible: bool,
        filter: &RouteFilter,
    ) -> Self {
        let routes: Vec<RouteView> = routes
            .iter()
            .map(|r| RouteView::from_route(r, filter.matches(r)))
            .collect();
        let matched = routes.iter().filter(|r| r.visible).count();

        Self {
            id,
            title,
            visible,
            routes,
            matched,
        }
    }
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub code: String,
    pub display: String,
    pub details: String,
    pub to_dsc: Vec<String>,
    pub from_dsc: Vec<String>,
    pub is_friday: bool,
    /// Lower-cased text the page script searches.
    pub search_text: String,
    /// Whether the route passes the current filter.
    pub visible: bool,
}

impl RouteView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route, visible: bool) -> Self {
        Self {
            code: route.code.clone(),
            display: route.display.clone(),
            details: route.details.clone(),
            to_dsc: route.to_dsc.clone(),
            from_dsc: route.from_dsc.clone(),
            is_friday: route.is_friday,
            search_text: route.search_text(),
            visible,
        }
    }
}
