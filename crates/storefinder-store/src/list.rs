//! Pure list helpers used by the store.

use std::collections::HashSet;

use storefinder_core::Location;

/// Keeps the first occurrence of each `id`, preserving arrival order.
///
/// Pages can overlap when the server's ordering shifts between requests, so
/// this runs over the whole combined list on every extension.
#[must_use]
pub fn dedup_by_id<I>(locations: I) -> Vec<Location>
where
    I: IntoIterator<Item = Location>,
{
    let mut seen = HashSet::new();
    locations
        .into_iter()
        .filter(|location| seen.insert(location.id.clone()))
        .collect()
}

/// Locations whose name contains `query`, compared case-insensitively.
///
/// No trimming or tokenisation: `"  soho"` only matches names containing
/// two spaces before `soho`. An empty query matches everything.
#[must_use]
pub fn filter_by_name(locations: &[Location], query: &str) -> Vec<Location> {
    let needle = query.to_lowercase();
    locations
        .iter()
        .filter(|location| location.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
