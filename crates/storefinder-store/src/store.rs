//! The location list state container.

use tokio::sync::watch;

use crate::list::{dedup_by_id, filter_by_name};
use crate::repository::LocationRepository;
use crate::state::LocationState;

/// Holds the current [`LocationState`] and applies operations to it.
///
/// Single writer, many readers: only the store's own operations publish,
/// and every publish replaces the whole snapshot. Subscribers are notified on
/// every publish, including ones that produce an identical snapshot.
///
/// Fetch failures never escape an operation; they are recorded in the
/// published state instead.
pub struct LocationStore<R> {
    repository: R,
    state: watch::Sender<LocationState>,
}

impl<R: LocationRepository> LocationStore<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        let (state, _) = watch::channel(LocationState::default());
        Self { repository, state }
    }

    /// Clone of the latest published snapshot.
    #[must_use]
    pub fn state(&self) -> LocationState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every future publish.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn publish(&self, next: LocationState) {
        tracing::trace!(
            locations = next.locations.len(),
            filtered = next.filtered_locations.len(),
            page = next.page,
            is_loading = next.is_loading,
            "publishing location state"
        );
        self.state.send_replace(next);
    }

    /// Reloads from page 1, replacing whatever was loaded.
    ///
    /// Not guarded against overlapping calls: if two run at once, the one
    /// whose response arrives last wins.
    pub async fn load_initial(&self) {
        tracing::debug!("loading first locations page");
        self.publish(self.state().with_loading(true).with_page(1).without_error());

        match self.repository.get_locations(1).await {
            Ok(result) => {
                let locations = dedup_by_id(result.locations);
                tracing::info!(
                    count = locations.len(),
                    has_more = result.has_more,
                    "first locations page loaded"
                );
                self.publish(
                    self.state()
                        .with_locations(locations)
                        .with_has_more(result.has_more)
                        .with_loading(false)
                        .with_page(2)
                        .without_error(),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load first locations page");
                self.publish(self.state().with_fetch_error(&err));
            }
        }
    }

    /// Appends the next page.
    ///
    /// Does nothing (no publish, no request) while a fetch is in flight or
    /// once the server has reported the last page. On success the search
    /// filter is dropped: `filtered_locations` becomes the full list again.
    /// On failure `page` stays put, so calling again retries the same page.
    pub async fn load_more(&self) {
        let current = self.state();
        if current.is_loading || !current.has_more {
            tracing::debug!(
                is_loading = current.is_loading,
                has_more = current.has_more,
                "skipping load_more"
            );
            return;
        }

        let page = current.page;
        tracing::debug!(page, "loading more locations");
        self.publish(current.with_loading(true));

        match self.repository.get_locations(page).await {
            Ok(result) => {
                let latest = self.state();
                let merged = dedup_by_id(
                    latest
                        .locations
                        .iter()
                        .cloned()
                        .chain(result.locations),
                );
                tracing::info!(
                    page,
                    total = merged.len(),
                    has_more = result.has_more,
                    "locations page appended"
                );
                self.publish(
                    latest
                        .with_locations(merged)
                        .with_has_more(result.has_more)
                        .with_loading(false)
                        .with_page(page.saturating_add(1))
                        .without_error(),
                );
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "failed to load more locations");
                self.publish(self.state().with_fetch_error(&err));
            }
        }
    }

    /// Narrows `filtered_locations` to names containing `query`, ignoring case.
    pub fn search(&self, query: &str) {
        let current = self.state();
        let filtered = filter_by_name(&current.locations, query);
        tracing::debug!(query, matches = filtered.len(), "searching locations");
        self.publish(
            current
                .with_filtered_locations(filtered)
                .with_search_query(query),
        );
    }

    /// Drops the search filter.
    pub fn clear_search(&self) {
        let current = self.state();
        let all = current.locations.clone();
        self.publish(current.with_filtered_locations(all).with_search_query(""));
    }

    /// Selects `id`, or deselects it if it is already selected.
    ///
    /// `id` is not checked against the loaded locations.
    pub fn select_location(&self, id: &str) {
        let current = self.state();
        let next = if current.selected_location_id.as_deref() == Some(id) {
            current.without_selection()
        } else {
            current.with_selected_location_id(id)
        };
        self.publish(next);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
