//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since lists are only loaded in
//! the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Decoded, LoadError};
use crate::state::load::LoadObserver;
use crate::state::provider::Provider;

/// Source label used in load diagnostics.
pub const PROVIDER_SOURCE: &str = "provider";

/// Provider collection endpoint.
pub const PROVIDER_ENDPOINT: &str = "/api/provider";

/// Report rejected entries and return the valid ones.
pub(crate) fn accept_decoded<T, O>(source: &str, decoded: Decoded<T>, observer: &O) -> Vec<T>
where
    O: LoadObserver + ?Sized,
{
    for entry in &decoded.rejected {
        observer.rejected(source, entry);
    }
    decoded.items
}

/// Fetch the provider list from `GET /api/provider`.
///
/// # Errors
///
/// Returns `LoadError::Network` if the request cannot be sent,
/// `LoadError::Http` on a non-2xx status, and `LoadError::Parse` if the body
/// is not a JSON array.
pub async fn fetch_providers<O>(observer: &O) -> Result<Vec<Provider>, LoadError>
where
    O: LoadObserver + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROVIDER_ENDPOINT)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Http { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| LoadError::Parse(e.to_string()))?;
        observer.payload(PROVIDER_SOURCE, &body);
        let decoded = super::types::decode_items::<Provider>(&body)?;
        Ok(accept_decoded(PROVIDER_SOURCE, decoded, observer))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = observer;
        Err(LoadError::Network("not available on server".to_owned()))
    }
}
