//! Local directory data source

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use wavotes_core::error::{Result, WavotesError};
use wavotes_core::source::DataSource;

/// Reads named resources from files in a directory
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a source reading from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !dir.is_dir() {
            debug!("Data directory does not exist yet: {}", dir.display());
        }
        Self { dir }
    }
}

#[async_trait]
impl DataSource for DirSource {
    async fn fetch_text(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        debug!("Reading {}", path.display());

        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(WavotesError::MissingResource(
                path.display().to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
