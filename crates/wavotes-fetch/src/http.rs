//! HTTP data source
//!
//! Fetches resources relative to a base URL, e.g. the raw-content URL of
//! the repository the vote recorder commits to.

use async_trait::async_trait;
use tracing::debug;
use url::Url;
use wavotes_core::error::{Result, WavotesError};
use wavotes_core::source::DataSource;

/// Fetches named resources from `<base_url>/<name>`
pub struct HttpSource {
    /// Base URL, always ending in `/` so names are appended, not substituted
    base_url: Url,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(WavotesError::Config(format!(
                "'{base_url}' cannot be used as a base URL"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            client: reqwest::Client::new(),
        })
    }

    /// Use a preconfigured client (proxies, user agent, timeouts)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Full URL a resource is fetched from
    pub fn resource_url(&self, name: &str) -> Result<Url> {
        Ok(self.base_url.join(name)?)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_text(&self, name: &str) -> Result<String> {
        let url = self.resource_url(name)?;
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WavotesError::HttpStatus {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!("Fetched {} ({} bytes)", name, text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let source = HttpSource::new("https://example.org/data").unwrap();
        assert_eq!(
            source.resource_url("votes.csv").unwrap().as_str(),
            "https://example.org/data/votes.csv"
        );

        let source = HttpSource::new("https://example.org/data/").unwrap();
        assert_eq!(
            source.resource_url("resolutions.csv").unwrap().as_str(),
            "https://example.org/data/resolutions.csv"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpSource::new("not a url"),
            Err(WavotesError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpSource::new("mailto:someone@example.org"),
            Err(WavotesError::Config(_))
        ));
    }
}
