//! Plain-text rendering of location snapshots.

use std::fmt::Write as _;

use storefinder_store::LocationState;

/// One-line description of a snapshot, used by `watch`.
pub(crate) fn render_summary(state: &LocationState) -> String {
    let mut line = format!(
        "page={} loaded={} shown={} has_more={} loading={}",
        state.page,
        state.locations.len(),
        state.filtered_locations.len(),
        state.has_more,
        state.is_loading,
    );
    if let Some(message) = &state.error_message {
        let _ = write!(line, " error=\"{message}\"");
    }
    line
}

/// Table of the filtered locations, one per line, selected one marked `*`.
pub(crate) fn render_list(state: &LocationState) -> String {
    let selected = state
        .selected_location_id
        .as_deref()
        .filter(|id| !id.is_empty());

    let mut out = String::new();
    for location in &state.filtered_locations {
        let marker = if selected == Some(location.id.as_str()) {
            '*'
        } else {
            ' '
        };
        let disabled = if location.is_enabled { "" } else { " (closed)" };
        let _ = writeln!(
            out,
            "{marker} {:<12} {:<32} {:<28} {:>9.5},{:>10.5}{disabled}",
            location.id,
            location.name,
            location.short_address,
            location.latitude,
            location.longitude,
        );
    }
    let _ = writeln!(
        out,
        "{} of {} locations{}",
        state.filtered_locations.len(),
        state.locations.len(),
        if state.has_more { " (more available)" } else { "" }
    );
    out
}
