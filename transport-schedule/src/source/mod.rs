//! Schedule grid source.
//!
//! Loads the already-decoded sheet once at startup, from disk or over
//! HTTP, and reports when it was last modified.

mod client;
mod error;

pub use client::{
    GridSource, LoadedGrid, SourceClient, SourceClientConfig, decode_grid, format_last_update,
    parse_last_modified,
};
pub use error::SourceError;
