//! Application configuration.
//!
//! Settings come from the environment, read once at startup.

use std::path::PathBuf;
use std::str::FromStr;

use crate::query::RouteFilter;
use crate::source::GridSource;

pub const ENV_SOURCE: &str = "SCHEDULE_SOURCE";
pub const ENV_OUTPUT: &str = "SCHEDULE_OUTPUT";
pub const ENV_FORMAT: &str = "SCHEDULE_FORMAT";
pub const ENV_FRIDAY: &str = "SCHEDULE_FRIDAY";
pub const ENV_ROUTE: &str = "SCHEDULE_ROUTE";
pub const ENV_QUERY: &str = "SCHEDULE_QUERY";
pub const ENV_TIMEOUT: &str = "SCHEDULE_TIMEOUT_SECS";

const DEFAULT_SOURCE: &str = "schedule.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: unknown output format {value:?} (expected html or json)")]
    Format { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got {value:?}")]
    Bool { var: &'static str, value: String },

    #[error("{var}: expected a whole number of seconds, got {value:?}")]
    Number { var: &'static str, value: String },
}

/// How the listing is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(other.to_string()),
        }
    }
}

/// Everything the binary needs to produce one listing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the grid is loaded from.
    pub source: GridSource,

    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,

    pub format: OutputFormat,

    /// Show the Friday timetable instead of the regular one.
    pub show_friday: bool,

    /// Route selection and search text.
    pub filter: RouteFilter,

    /// HTTP timeout when the source is a URL.
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset and blank variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(source) = get(ENV_SOURCE) {
            config.source = GridSource::parse(&source);
        }

        config.output = get(ENV_OUTPUT).map(PathBuf::from);

        if let Some(format) = get(ENV_FORMAT) {
            config.format = format.parse().map_err(|value| ConfigError::Format {
                var: ENV_FORMAT,
                value,
            })?;
        }

        if let Some(friday) = get(ENV_FRIDAY) {
            config.show_friday = parse_bool(&friday).ok_or(ConfigError::Bool {
                var: ENV_FRIDAY,
                value: friday,
            })?;
        }

        let mut filter = RouteFilter::new();
        if let Some(code) = get(ENV_ROUTE) {
            filter = filter.with_code(code);
        }
        if let Some(query) = get(ENV_QUERY) {
            filter = filter.with_query(query);
        }
        config.filter = filter;

        if let Some(timeout) = get(ENV_TIMEOUT) {
            config.timeout_secs = timeout.trim().parse().map_err(|_| ConfigError::Number {
                var: ENV_TIMEOUT,
                value: timeout.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_source(mut self, source: GridSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_friday(mut self, show_friday: bool) -> Self {
        self.show_friday = show_friday;
        self
    }

    pub fn with_filter(mut self, filter: RouteFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: GridSource::parse(DEFAULT_SOURCE),
            output: None,
            format: OutputFormat::Html,
            show_friday: false,
            filter: RouteFilter::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
