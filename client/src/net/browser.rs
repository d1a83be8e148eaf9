//! Browser implementations of the core I/O seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core crate talks to the network through `Transport` and persists the
//! bearer token, theme and identity user through `KeyValueStore`. Here the
//! first is backed by `gloo-net` and the second by `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Without the `csr` feature there is no browser: the transport reports
//! itself unavailable and the store behaves as if storage were blocked, so
//! native unit tests of the pages compile without a DOM.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use tourbook::config::{AppConfig, ConfigError, ENV_API_BASE_URL, ENV_IDENTITY_API_KEY, ENV_IDENTITY_BASE_URL};
use tourbook::net::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use tourbook::storage::{KeyValueStore, StorageError};

/// Settings baked in at build time (`TOURBOOK_*` in the trunk environment).
///
/// # Errors
///
/// Returns an error if a baked-in value is unparsable.
pub fn build_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(build_env)
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_BASE_URL => option_env!("TOURBOOK_API_BASE_URL"),
        ENV_IDENTITY_API_KEY => option_env!("TOURBOOK_IDENTITY_API_KEY"),
        ENV_IDENTITY_BASE_URL => option_env!("TOURBOOK_IDENTITY_BASE_URL"),
        _ => None,
    };
    value.map(str::to_owned)
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// `fetch`-backed transport. Timeouts are left to the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as FetchMethod, RequestBuilder};
            use tourbook::net::transport::Method;

            let method = match request.method {
                Method::Get => FetchMethod::GET,
                Method::Post => FetchMethod::POST,
                Method::Put => FetchMethod::PUT,
                Method::Patch => FetchMethod::PATCH,
                Method::Delete => FetchMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let fetch = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Request(e.to_string()))?;
            let resp = fetch
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::Unavailable(format!("no browser to send {}", request.url)))
        }
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`. Looked up per call; private-mode browsers that
/// refuse storage surface as `StorageError::Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn blocked(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{e:?}"))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(blocked)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("no browser".to_owned()))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(blocked)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("no browser".to_owned()))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(blocked)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("no browser".to_owned()))
        }
    }
}
