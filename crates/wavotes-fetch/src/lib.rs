//! Data source backends for wavotes
//!
//! This crate implements the `DataSource` trait for HTTP and for a local
//! directory, and picks one from a user-supplied location string.

pub mod dir;
pub mod http;

pub use dir::DirSource;
pub use http::HttpSource;

use wavotes_core::error::Result;
use wavotes_core::source::DataSource;

/// Build a source for `location`.
///
/// Locations starting with `http://` or `https://` (in any letter case)
/// are fetched over HTTP; anything else is treated as a directory path.
///
/// ```
/// use wavotes_core::source::DataSource;
///
/// let source = wavotes_fetch::source_for("https://example.org/data").unwrap();
/// assert_eq!(source.describe(), "https://example.org/data/");
///
/// let source = wavotes_fetch::source_for("./data").unwrap();
/// assert_eq!(source.describe(), "./data");
/// ```
pub fn source_for(location: &str) -> Result<Box<dyn DataSource>> {
    if has_scheme(location, "http://") || has_scheme(location, "https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(DirSource::new(location)))
    }
}

fn has_scheme(location: &str, scheme: &str) -> bool {
    location
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}
