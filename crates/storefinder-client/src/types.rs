//! Wire types for the paged locations endpoint.
//!
//! ## Response shape
//!
//! ```json
//! {
//!   "locations": [
//!     {
//!       "id": "st-102",
//!       "name": "Blank Street Soho",
//!       "address": "102 Prince St, New York, NY 10012",
//!       "shortAddress": "102 Prince St",
//!       "latitude": 40.7246,
//!       "longitude": -73.9986,
//!       "imgUrl": "https://cdn.example.com/st-102.jpg",
//!       "status": null,
//!       "isEnabled": true,
//!       "_disableUntil": null
//!     }
//!   ],
//!   "hasMore": true
//! }
//! ```
//!
//! ### `hasMore`
//! Omitted on the final page by some deployments. Absent means `false`.
//!
//! ### `_disableUntil`
//! The only field with a leading underscore on the wire. Either `null`,
//! absent, or an ISO-8601 timestamp string. Mapped to
//! [`Location::disable_until`] without parsing.
//!
//! ### `status`
//! Optional and nullable; passed through untouched.
//!
//! Every other field is required. A page with a location missing any of them
//! fails to decode as a whole.

use serde::Deserialize;
use storefinder_core::{Location, PageResult};

/// Top-level response from `GET <locations endpoint>?page=N`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsPageResponse {
    pub locations: Vec<LocationDto>,

    #[serde(default)]
    pub has_more: bool,
}

/// A single location as sent by the server.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub short_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub img_url: String,

    #[serde(default)]
    pub status: Option<String>,

    pub is_enabled: bool,

    #[serde(rename = "_disableUntil", default)]
    pub disable_until: Option<String>,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            address: dto.address,
            short_address: dto.short_address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            img_url: dto.img_url,
            status: dto.status,
            is_enabled: dto.is_enabled,
            disable_until: dto.disable_until,
        }
    }
}

impl From<LocationsPageResponse> for PageResult {
    fn from(response: LocationsPageResponse) -> Self {
        Self {
            locations: response.locations.into_iter().map(Location::from).collect(),
            has_more: response.has_more,
        }
    }
}
