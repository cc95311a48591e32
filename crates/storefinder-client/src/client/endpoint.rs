//! Locations endpoint URL construction.

use crate::error::ClientError;

/// Appends `locations_path` to the path of `base_url`.
///
/// `https://api.example.com/v1/` + `/locations` yields
/// `https://api.example.com/v1/locations`. A query on the base is kept, so
/// `https://api.example.com/v1?key=abc` yields
/// `https://api.example.com/v1/locations?key=abc`. A fragment is dropped.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an absolute
/// `http`/`https` URL.
pub fn build_endpoint(base_url: &str, locations_path: &str) -> Result<reqwest::Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let mut url = reqwest::Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme \"{other}\""))),
    }

    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot carry a path".to_owned()))?
        .pop_if_empty()
        .extend(locations_path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url)
}
