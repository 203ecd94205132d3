//! Transport schedule parser.
//!
//! Reads the hand-maintained bus schedule sheet and answers: "which routes
//! run, and when do they leave for and from DSC?"

pub mod config;
pub mod domain;
pub mod page;
pub mod parser;
pub mod query;
pub mod source;
