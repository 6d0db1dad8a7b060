//! # Artists Collector Common Library
//!
//! Shared code for the Artists Collector dashboard including:
//! - Data-transfer models for backend records (artists, opportunities,
//!   collection results, process status)
//! - Configuration resolution (CLI → ENV → TOML → compiled default)
//! - Number, score and date formatting for the review pages

pub mod config;
pub mod error;
pub mod format;
pub mod models;

pub use error::{Error, Result};
pub use format::format_compact;
