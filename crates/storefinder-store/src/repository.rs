use async_trait::async_trait;
use storefinder_core::{FetchError, LocationDataSource, PageResult};

/// Page access as seen by the store.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Fetch page `page` (1-based).
    async fn get_locations(&self, page: u32) -> Result<PageResult, FetchError>;
}

/// Repository that forwards straight to a [`LocationDataSource`].
pub struct DataSourceRepository<D> {
    source: D,
}

impl<D: LocationDataSource> DataSourceRepository<D> {
    #[must_use]
    pub fn new(source: D) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &D {
        &self.source
    }
}

#[async_trait]
impl<D: LocationDataSource> LocationRepository for DataSourceRepository<D> {
    async fn get_locations(&self, page: u32) -> Result<PageResult, FetchError> {
        self.source.fetch_page(page).await
    }
}
