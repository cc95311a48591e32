use async_trait::async_trait;

use crate::fetch_error::FetchError;
use crate::location::PageResult;

/// Remote source of paged store locations.
///
/// Pages are numbered from 1. Implementations return the page's locations in
/// server order and do not retry or cache.
#[async_trait]
pub trait LocationDataSource: Send + Sync {
    /// Fetch one page.
    async fn fetch_page(&self, page: u32) -> Result<PageResult, FetchError>;
}
