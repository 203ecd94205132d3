//! Schedule grid loader.
//!
//! Reads the decoded sheet from a local file or over HTTP. The grid is a
//! JSON array of rows, each an array of cells, which is what spreadsheet
//! decoders emit for a sheet read as raw rows.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::LAST_MODIFIED;
use tracing::{debug, info};

use crate::domain::RawRow;

use super::error::SourceError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Display format for the last-update line, e.g. "19 October 2026, 9:05 AM".
const LAST_UPDATE_FORMAT: &str = "%-d %B %Y, %-I:%M %p";

/// Where the schedule grid comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSource {
    File(PathBuf),
    Url(String),
}

impl GridSource {
    /// `http://` and `https://` locations are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            GridSource::Url(location.to_string())
        } else {
            GridSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for GridSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSource::File(path) => write!(f, "{}", path.display()),
            GridSource::Url(url) => f.write_str(url),
        }
    }
}

/// Configuration for the source client.
#[derive(Debug, Clone)]
pub struct SourceClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceClientConfig {
    pub fn new() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for SourceClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded grid and when its source last changed, if known.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGrid {
    pub rows: Vec<RawRow>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Client for loading the schedule grid.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
}

impl SourceClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SourceClientConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Load the grid once. No retries.
    pub async fn load(&self, source: &GridSource) -> Result<LoadedGrid, SourceError> {
        let grid = match source {
            GridSource::File(path) => read_file(path).await?,
            GridSource::Url(url) => self.fetch(url).await?,
        };

        info!(
            source = %source,
            rows = grid.rows.len(),
            "Loaded schedule grid"
        );

        Ok(grid)
    }

    async fn fetch(&self, url: &str) -> Result<LoadedGrid, SourceError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_last_modified);

        if last_modified.is_none() {
            debug!(url, "No usable Last-Modified header");
        }

        let body = response.text().await?;
        let rows = decode_grid(&body)?;

        Ok(LoadedGrid {
            rows,
            last_modified,
        })
    }
}

async fn read_file(path: &Path) -> Result<LoadedGrid, SourceError> {
    let io_error = |source| SourceError::Io {
        path: path.display().to_string(),
        source,
    };

    let body = tokio::fs::read_to_string(path).await.map_err(io_error)?;
    let last_modified = tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::<Utc>::from);

    let rows = decode_grid(&body)?;

    Ok(LoadedGrid {
        rows,
        last_modified,
    })
}

/// Decode a JSON grid: an array of rows, each an array of cells or `null`.
pub fn decode_grid(body: &str) -> Result<Vec<RawRow>, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Json {
        message: e.to_string(),
    })
}

/// Parse an HTTP `Last-Modified` value (RFC 2822 style dates).
pub fn parse_last_modified(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp for the last-update line.
pub fn format_last_update<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format(LAST_UPDATE_FORMAT).to_string()
}
