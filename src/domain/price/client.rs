//! Prices sub-client — fetch, validate, normalize, cache the latest book.

use super::PriceBook;
use crate::client::SwapClient;
use crate::error::SwapError;

/// Sub-client for price feed operations.
pub struct Prices<'a> {
    pub(crate) client: &'a SwapClient,
}

impl<'a> Prices<'a> {
    /// Fetch the feed and build a fresh book. On success the cached book is
    /// replaced wholesale; on failure it is left as it was.
    pub async fn fetch(&self) -> Result<PriceBook, SwapError> {
        let feed = self.client.http.get_prices().await?;
        let book = PriceBook::ingest(feed);
        *self.client.latest_book.write().await = Some(book.clone());
        Ok(book)
    }

    /// The book from the last successful fetch, if any.
    pub async fn cached(&self) -> Option<PriceBook> {
        self.client.latest_book.read().await.clone()
    }
}
