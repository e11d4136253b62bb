use std::sync::Arc;

use url::Url;

use crate::domain::Entry;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::{FeedMeta, Normalizer};

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new() -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let normalizer = Normalizer::new();

        Self {
            fetcher,
            normalizer,
        }
    }

    /// Fetch and parse the feed once. Errors here are fatal to the caller;
    /// the UI is never started on a failed load.
    pub async fn load(&self, url: &str) -> crate::app::Result<(FeedMeta, Vec<Entry>)> {
        let url = Url::parse(url)?;

        tracing::info!(%url, "fetching feed");
        let body = self.fetcher.fetch(url.as_str()).await?;

        let (meta, entries) = self.normalizer.normalize(&body)?;
        tracing::info!(entries = entries.len(), "feed parsed");

        Ok((meta, entries))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TidingsError;

    #[tokio::test]
    async fn test_load_rejects_invalid_url() {
        let ctx = AppContext::new();
        let result = ctx.load("not a url").await;
        assert!(matches!(result, Err(TidingsError::InvalidUrl(_))));
    }
}
