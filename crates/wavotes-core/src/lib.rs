//! Core types, traits, and utilities for wavotes
//!
//! This crate provides the record types, error handling, CSV tokenizer,
//! timestamp and chamber helpers, and the `DataSource` trait used by the
//! other wavotes crates.

pub mod chamber;
pub mod csv;
pub mod error;
pub mod source;
pub mod timestamp;
pub mod types;

// Re-export commonly used types
pub use chamber::{Chamber, get_chamber};
pub use error::{DataLoadError, Result, WavotesError};
pub use source::DataSource;
pub use timestamp::timestamp_to_date;
pub use types::{CoreData, Record, VoteChoice};
