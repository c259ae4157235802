//! Blocking HTTP client for api.vaktija.ba.
//!
//! The API is path-addressed: `/vaktija/v1/<location>[/<yyyy>[/<mm>[/<dd>]]]`,
//! where a bare location id means "today". The response body is kept as the
//! raw JSON string so it can be cached verbatim; decoding happens in
//! [`crate::vaktija`]. There is no retry logic — a failed fetch fails the
//! run.

use std::time::Duration;

use crate::constants::{FETCH_TIMEOUT_SECS, VAKTIJA_API_URL};
use crate::error::VaktijaError;

/// Build the request URL for a location id and an optional target date.
///
/// `date` is the already-validated CLI form `yyyy[/mm[/dd]]`, which maps
/// directly onto the API's path segments.
pub fn request_url(location: &str, date: Option<&str>) -> String {
    let mut url = format!("{VAKTIJA_API_URL}/{location}");
    if let Some(date) = date {
        url.push('/');
        url.push_str(date);
    }
    url
}

/// Fetch the raw vaktija document for a location and optional date.
///
/// Any transport failure, timeout, or non-success status surfaces as
/// [`VaktijaError::SourceUnavailable`].
pub fn download_vaktija(location: &str, date: Option<&str>) -> Result<String, VaktijaError> {
    let unavailable = |e: reqwest::Error| VaktijaError::SourceUnavailable(e.to_string());

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(unavailable)?;

    client
        .get(request_url(location, date))
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(unavailable)
}
