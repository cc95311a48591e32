//! Command handlers. Each one drives a [`LocationStore`] the way a UI would
//! and prints from the published snapshots.

use storefinder_store::{LocationError, LocationRepository, LocationState, LocationStore};

use crate::render;

#[derive(Debug)]
pub(crate) struct ListOptions {
    pub pages: u32,
    pub search: Option<String>,
    pub select: Option<String>,
    pub json: bool,
}

/// Loads up to `pages` pages into `store`.
///
/// Stops early on the last page or on a failed fetch.
pub(crate) async fn load_pages<R: LocationRepository>(store: &LocationStore<R>, pages: u32) {
    if pages == 0 {
        return;
    }
    store.load_initial().await;
    for _ in 1..pages {
        let state = store.state();
        if !state.has_more || state.error != LocationError::None {
            break;
        }
        store.load_more().await;
    }
}

/// Handler for `storefinder list`.
///
/// # Errors
///
/// Returns an error if the final state cannot be serialized for `--json`.
pub(crate) async fn list<R: LocationRepository>(
    store: &LocationStore<R>,
    options: &ListOptions,
) -> anyhow::Result<()> {
    load_pages(store, options.pages).await;

    if let Some(query) = &options.search {
        store.search(query);
    }
    if let Some(id) = &options.select {
        store.select_location(id);
    }

    let state = store.state();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render::render_list(&state));
    }
    report_error(&state);
    Ok(())
}

/// Handler for `storefinder watch`.
///
/// A `watch` receiver only holds the latest snapshot, so a burst of publishes
/// (a page's final state followed at once by the next page's loading state)
/// prints once, showing the newest value.
pub(crate) async fn watch<R: LocationRepository>(store: &LocationStore<R>, pages: u32) {
    let mut rx = store.subscribe();

    let printer = async {
        while rx.changed().await.is_ok() {
            let line = render::render_summary(&rx.borrow_and_update());
            println!("{line}");
        }
    };

    tokio::select! {
        () = load_pages(store, pages) => {}
        () = printer => {}
    }

    // Publishes that landed after the last poll of the printer.
    if rx.has_changed().unwrap_or(false) {
        println!("{}", render::render_summary(&rx.borrow_and_update()));
    }

    report_error(&store.state());
}

fn report_error(state: &LocationState) {
    if let Some(message) = &state.error_message {
        tracing::error!(error = ?state.error, "{message}");
    }
}
