//! Data source trait for CSV resources
//!
//! This module defines the `DataSource` trait that backend crates
//! implement. A source hands back the text content of a named resource;
//! the loader never needs to know whether it came from disk or over HTTP.

use crate::error::{Result, WavotesError};
use async_trait::async_trait;
use std::collections::HashMap;

/// Name of the resolutions resource
pub const RESOLUTIONS_CSV: &str = "resolutions.csv";

/// Name of the votes resource
pub const VOTES_CSV: &str = "votes.csv";

/// Something that can produce the text of a named resource.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full text content of `name`.
    async fn fetch_text(&self, name: &str) -> Result<String>;

    /// Human-readable description of where resources come from, for logs.
    fn describe(&self) -> String;
}

/// In-memory source backed by a map of resource name to content.
///
/// ```
/// use wavotes_core::source::{DataSource, MemorySource};
///
/// # tokio_test::block_on(async {
/// let source = MemorySource::new().with_resource("votes.csv", "nation_id\n");
/// assert_eq!(source.fetch_text("votes.csv").await.unwrap(), "nation_id\n");
/// assert!(source.fetch_text("resolutions.csv").await.is_err());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource
    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.resources.insert(name.into(), content.into());
        self
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch_text(&self, name: &str) -> Result<String> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| WavotesError::MissingResource(name.to_string()))
    }

    fn describe(&self) -> String {
        format!("memory ({} resources)", self.resources.len())
    }
}
