//! Route records and route codes.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Separator between a route's code and its name in display labels.
pub const DISPLAY_SEPARATOR: &str = " — ";

/// A route code as written in the first column of a route-opening row.
///
/// Codes start with `R` (regular) or `F` (Friday) followed by at least one
/// digit, in either case. Anything may follow the digits ("R12A", "F3 (AC)");
/// the code is kept verbatim after trimming. `RouteCode::parse` returns
/// `None` for text that does not open a route.
///
/// # Examples
///
/// ```
/// use transport_schedule::domain::RouteCode;
///
/// let code = RouteCode::parse(" r12 ").unwrap();
/// assert_eq!(code.as_str(), "r12");
/// assert!(!code.is_friday_series());
///
/// assert!(RouteCode::parse("F3").unwrap().is_friday_series());
/// assert!(RouteCode::parse("Route No").is_none());
/// assert!(RouteCode::parse("R").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteCode(String);

impl RouteCode {
    /// Parse a route code from cell text.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        match chars.next() {
            Some('R' | 'r' | 'F' | 'f') => {}
            _ => return None,
        }

        if !chars.next().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(RouteCode(s.to_string()))
    }

    /// Returns the code as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `F`-prefixed codes, which by convention run on Fridays.
    pub fn is_friday_series(&self) -> bool {
        self.0.starts_with(['F', 'f'])
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scheduled service: a code, labels, and its departures to and from DSC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub code: String,
    pub name: String,
    pub details: String,
    /// `code`, plus `" — name"` when the route has a name.
    pub display: String,
    /// Normalized departures towards DSC, in sheet order.
    pub to_dsc: Vec<String>,
    /// Normalized departures from DSC, in sheet order.
    pub from_dsc: Vec<String>,
    /// Shown with a Friday badge.
    pub is_friday: bool,
}

impl Route {
    /// Create a route with no departures yet.
    ///
    /// `collected_on_friday` is whether the opening row sat in the Friday
    /// section of the sheet.
    pub fn new(
        code: RouteCode,
        name: impl Into<String>,
        details: impl Into<String>,
        collected_on_friday: bool,
    ) -> Self {
        let is_friday = collected_on_friday || code.is_friday_series();
        let name = name.into();
        let code = code.into_string();
        Self {
            display: display_label(&code, &name),
            code,
            name,
            details: details.into(),
            to_dsc: Vec::new(),
            from_dsc: Vec::new(),
            is_friday,
        }
    }

    /// Record an outbound departure. Empty times are skipped.
    pub fn push_to_dsc(&mut self, time: String) {
        if !time.is_empty() {
            self.to_dsc.push(time);
        }
    }

    /// Record a return departure. Empty times are skipped.
    pub fn push_from_dsc(&mut self, time: String) {
        if !time.is_empty() {
            self.from_dsc.push(time);
        }
    }

    /// Recompute the display label and drop repeated times.
    pub fn finish(&mut self) {
        self.display = display_label(&self.code, &self.name);
        dedup_in_order(&mut self.to_dsc);
        dedup_in_order(&mut self.from_dsc);
    }

    /// All searchable text, lower-cased and space-joined.
    pub fn search_text(&self) -> String {
        [self.code.as_str(), self.name.as_str(), self.details.as_str()]
            .into_iter()
            .chain(self.to_dsc.iter().map(String::as_str))
            .chain(self.from_dsc.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

fn display_label(code: &str, name: &str) -> String {
    if name.is_empty() {
        code.to_string()
    } else {
        format!("{code}{DISPLAY_SEPARATOR}{name}")
    }
}

/// Remove repeated entries, keeping the first occurrence of each.
pub fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}
