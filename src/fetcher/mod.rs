pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// One-shot retrieval of a feed document.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
