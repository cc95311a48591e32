//! Location list state container.
//!
//! [`LocationStore`] owns the current [`LocationState`] snapshot and the
//! operations that replace it: load the first page, load the next page,
//! search by name, clear the search, toggle the selected location.
//! Subscribers receive every published snapshot through a `tokio::sync::watch`
//! channel.

pub mod list;
pub mod repository;
pub mod state;
pub mod store;

pub use list::{dedup_by_id, filter_by_name};
pub use repository::{DataSourceRepository, LocationRepository};
pub use state::{LocationError, LocationState};
pub use store::LocationStore;
