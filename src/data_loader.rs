//! Data loader module for resolution and vote CSV files
//!
//! Retrieves `resolutions.csv` and then `votes.csv` from a [`DataSource`],
//! tokenizes both, derives `date_part` on every resolution, and indexes
//! resolutions by id.
//!
//! # Example
//!
//! ```no_run
//! use wavotes::data_loader::DataLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DataLoader::from_location("https://example.org/wa-votes/")?;
//!     let data = loader.load_all_data().await?;
//!
//!     println!("Loaded {} resolutions", data.resolutions.len());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use tracing::{debug, error, info, warn};
use wavotes_core::csv::parse_csv;
use wavotes_core::error::{DataLoadError, Result};
use wavotes_core::source::{DataSource, RESOLUTIONS_CSV, VOTES_CSV};
use wavotes_core::timestamp::timestamp_to_date;
use wavotes_core::types::{CoreData, DATE_PART_FIELD, ID_FIELD, PROMOTED_FIELD, Record};

/// Loads the resolution and vote tables from a data source
pub struct DataLoader {
    source: Box<dyn DataSource>,
}

impl DataLoader {
    /// Create a loader over an existing source
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Create a loader for a URL or directory path
    pub fn from_location(location: &str) -> Result<Self> {
        Ok(Self::new(wavotes_fetch::source_for(location)?))
    }

    /// Where this loader reads from
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Load both tables.
    ///
    /// Any failure is logged with its cause and reported as a single
    /// [`DataLoadError`]; no partial result is returned.
    pub async fn load_all_data(&self) -> std::result::Result<CoreData, DataLoadError> {
        match self.try_load().await {
            Ok(data) => Ok(data),
            Err(e) => {
                error!("Failed to load data from {}: {}", self.source.describe(), e);
                Err(DataLoadError::new(e))
            }
        }
    }

    async fn try_load(&self) -> Result<CoreData> {
        info!("Loading vote records from {}", self.source.describe());

        // Votes are only requested after resolutions arrived.
        let resolutions_text = self.source.fetch_text(RESOLUTIONS_CSV).await?;
        let mut resolutions = parse_csv(&resolutions_text);
        if resolutions.dropped > 0 {
            warn!(
                "Dropped {} malformed rows from {}",
                resolutions.dropped, RESOLUTIONS_CSV
            );
        }

        let votes_text = self.source.fetch_text(VOTES_CSV).await?;
        let votes = parse_csv(&votes_text);
        if votes.dropped > 0 {
            warn!("Dropped {} malformed rows from {}", votes.dropped, VOTES_CSV);
        }

        attach_date_parts(&mut resolutions.rows);
        let resolutions_by_id = index_by_id(&resolutions.rows);

        info!(
            "Loaded {} resolutions and {} vote rows",
            resolutions.rows.len(),
            votes.rows.len()
        );

        Ok(CoreData {
            resolutions: resolutions.rows,
            resolutions_by_id,
            all_votes: votes.rows,
            votes_header: votes.headers,
        })
    }
}

/// Convenience wrapper: load both tables from `source`
pub async fn load_all_data(
    source: Box<dyn DataSource>,
) -> std::result::Result<CoreData, DataLoadError> {
    DataLoader::new(source).load_all_data().await
}

/// Set `date_part` on every resolution from its `promoted` timestamp.
///
/// Records without a `promoted` column get `"N/A"`.
pub fn attach_date_parts(resolutions: &mut [Record]) {
    for record in resolutions.iter_mut() {
        let date = timestamp_to_date(record.get(PROMOTED_FIELD).unwrap_or(""));
        record.insert(DATE_PART_FIELD, date);
    }
}

/// Index resolutions by `id`; when ids repeat the last record wins.
pub fn index_by_id(resolutions: &[Record]) -> HashMap<String, Record> {
    let mut by_id = HashMap::with_capacity(resolutions.len());
    for record in resolutions {
        match record.get(ID_FIELD) {
            Some(id) => {
                if by_id.insert(id.to_string(), record.clone()).is_some() {
                    debug!("Duplicate resolution id {}, keeping the later row", id);
                }
            }
            None => debug!("Resolution row without an id column, not indexed"),
        }
    }
    by_id
}
