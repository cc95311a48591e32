pub mod classify;
pub mod client;
pub mod error;
pub(crate) mod retry;
pub mod types;

pub use client::{ClientConfig, LocationsClient};
pub use error::ClientError;
pub use types::{LocationDto, LocationsPageResponse};
