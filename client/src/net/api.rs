//! Fixture fetches.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, both fixtures in
//! flight at once and joined. Native builds get an error instead, since the
//! fixtures are only reachable from a page.
//!
//! ERROR HANDLING
//! ==============
//! Any failure (network, non-success status, body decode) fails the whole
//! load with a `String` message. There is no retry and no partial catalog.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use atlas::catalog::Catalog;
#[cfg(any(test, feature = "csr"))]
use atlas::catalog::Fixture;

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(fixture: Fixture, status: u16) -> String {
    format!("{} request failed: {status}", fixture.path())
}

#[cfg(any(test, feature = "csr"))]
fn transport_failed_message(fixture: Fixture, err: &dyn std::fmt::Display) -> String {
    format!("{} request failed: {err}", fixture.path())
}

#[cfg(feature = "csr")]
async fn fetch_fixture(fixture: Fixture) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(fixture.path())
        .send()
        .await
        .map_err(|e| transport_failed_message(fixture, &e))?;
    if !resp.ok() {
        return Err(request_failed_message(fixture, resp.status()));
    }
    resp.text()
        .await
        .map_err(|e| transport_failed_message(fixture, &e))
}

/// Fetch and decode both fixtures.
///
/// # Errors
///
/// Returns a message naming the fixture that failed to load or decode.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    #[cfg(feature = "csr")]
    {
        let (planets, markers) =
            futures::try_join!(fetch_fixture(Fixture::Planets), fetch_fixture(Fixture::Markers))?;
        Catalog::from_json(&planets, &markers).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("fixtures are only available in the browser".to_owned())
    }
}
