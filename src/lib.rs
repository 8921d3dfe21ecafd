//! wavotes - Load and browse World Assembly resolution vote records
//!
//! This library provides functionality to:
//! - Load `resolutions.csv` and `votes.csv` from a directory or over HTTP
//! - Tokenize the quote-aware CSV those files use
//! - Derive display dates and chamber labels for resolutions
//! - Count votes per resolution and list a nation's voting history
//! - Render results as terminal tables or JSON
//!
//! # Examples
//!
//! ```no_run
//! use wavotes::{data_loader::DataLoader, report::summarize};
//!
//! #[tokio::main]
//! async fn main() -> wavotes::Result<()> {
//!     let loader = DataLoader::from_location("./data")?;
//!     let data = loader.load_all_data().await?;
//!
//!     for summary in summarize(&data, None) {
//!         println!("{} {}", summary.id, summary.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod authors;
pub mod cli;
pub mod data_loader;
pub mod output;
pub mod report;
pub mod tally;

pub use wavotes_core::{chamber, csv, error, source, timestamp, types};

// Re-export commonly used types
pub use data_loader::{DataLoader, load_all_data};
pub use wavotes_core::{CoreData, DataLoadError, Record, Result, VoteChoice, WavotesError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
