//! Immutable snapshot of everything the location list UI renders.

use serde::Serialize;
use storefinder_core::{FetchError, Location};

/// Error kind carried by a [`LocationState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[default]
    None,
    /// Any failed fetch, transport or otherwise.
    Network,
    /// Reserved. Nothing produces it yet.
    Generic,
}

/// One published snapshot.
///
/// Never mutated after publishing; every transition builds a new value with
/// the consuming `with_*` methods below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationState {
    /// Every loaded location, unique by `id`, in arrival order.
    pub locations: Vec<Location>,
    /// `locations` narrowed by `search_query`.
    pub filtered_locations: Vec<Location>,
    pub search_query: Option<String>,
    pub is_loading: bool,
    pub has_more: bool,
    /// Next page to request.
    pub page: u32,
    /// `None` when nothing is selected.
    pub selected_location_id: Option<String>,
    pub error: LocationError,
    pub error_message: Option<String>,
}

impl Default for LocationState {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            filtered_locations: Vec::new(),
            search_query: None,
            is_loading: false,
            has_more: true,
            page: 1,
            selected_location_id: None,
            error: LocationError::None,
            error_message: None,
        }
    }
}

impl LocationState {
    #[must_use]
    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    #[must_use]
    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    /// Replaces the full list and resets the filtered list to match it.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.filtered_locations.clone_from(&locations);
        self.locations = locations;
        self
    }

    #[must_use]
    pub fn with_filtered_locations(mut self, filtered: Vec<Location>) -> Self {
        self.filtered_locations = filtered;
        self
    }

    #[must_use]
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_selected_location_id(mut self, id: impl Into<String>) -> Self {
        self.selected_location_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn without_selection(mut self) -> Self {
        self.selected_location_id = None;
        self
    }

    /// Records a failed fetch. The error kind is always
    /// [`LocationError::Network`]; the message depends on the failure.
    #[must_use]
    pub fn with_fetch_error(mut self, err: &FetchError) -> Self {
        self.is_loading = false;
        self.error = LocationError::Network;
        self.error_message = Some(err.user_message());
        self
    }

    #[must_use]
    pub fn without_error(mut self) -> Self {
        self.error = LocationError::None;
        self.error_message = None;
        self
    }

    /// `true` when a non-empty search query is active.
    #[must_use]
    pub fn has_active_search(&self) -> bool {
        self.search_query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// The selected location, if the selection refers to a loaded one.
    #[must_use]
    pub fn selected_location(&self) -> Option<&Location> {
        let id = self
            .selected_location_id
            .as_deref()
            .filter(|id| !id.is_empty())?;
        self.locations.iter().find(|location| location.id == id)
    }
}
