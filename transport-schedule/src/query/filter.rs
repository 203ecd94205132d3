//! Route-code and free-text filtering.

use crate::domain::Route;

/// A route selection: an exact code, a free-text query, or both.
///
/// Blank or whitespace-only values mean "no constraint". Anything else is
/// kept as given. An empty result is a normal outcome.
///
/// # Examples
///
/// ```
/// use transport_schedule::query::RouteFilter;
///
/// let filter = RouteFilter::new().with_code("R1").with_query("mirpur");
/// assert_eq!(filter.code(), Some("R1"));
/// assert!(!filter.is_unrestricted());
/// assert!(RouteFilter::new().with_query("   ").is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFilter {
    code: Option<String>,
    /// Stored lower-cased.
    query: Option<String>,
}

impl RouteFilter {
    /// A filter that keeps every route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only routes whose code is exactly `code`.
    pub fn with_code(mut self, code: impl AsRef<str>) -> Self {
        self.code = non_blank(code.as_ref()).map(str::to_string);
        self
    }

    /// Keep only routes whose text contains `query`, ignoring case.
    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = non_blank(query.as_ref()).map(str::to_lowercase);
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.code.is_none() && self.query.is_none()
    }

    /// Whether a single route passes both constraints.
    pub fn matches(&self, route: &Route) -> bool {
        if let Some(code) = &self.code {
            if route.code != *code {
                return false;
            }
        }
        if let Some(query) = &self.query {
            if !route.search_text().contains(query.as_str()) {
                return false;
            }
        }
        true
    }

    /// The routes that pass, in their original order.
    pub fn apply<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        routes.iter().filter(|r| self.matches(r)).collect()
    }
}

fn non_blank(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// Filter `routes` by an exact code and a case-insensitive text query.
///
/// Either may be empty to skip that constraint; both together must hold.
///
/// # Examples
///
/// ```
/// use transport_schedule::domain::{Route, RouteCode};
/// use transport_schedule::query::filter_routes;
///
/// let routes = vec![
///     Route::new(RouteCode::parse("R1").unwrap(), "Main", "", false),
///     Route::new(RouteCode::parse("R2").unwrap(), "Campus", "", false),
/// ];
///
/// let hits = filter_routes(&routes, "R1", "main");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].code, "R1");
///
/// assert!(filter_routes(&routes, "", "zzz").is_empty());
/// ```
pub fn filter_routes<'a>(
    routes: &'a [Route],
    selected_code: &str,
    query: &str,
) -> Vec<&'a Route> {
    RouteFilter::new()
        .with_code(selected_code)
        .with_query(query)
        .apply(routes)
}
