//! Browser `fetch` transport

use std::future::Future;

use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::core::{Transport, TransportError};

/// Fetches relative to the page, like any other static asset
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> {
        let uri = uri.to_string();
        async move {
            let connection = |e: JsValue| TransportError::Connection {
                uri: uri.clone(),
                reason: format!("{e:?}"),
            };

            let window = web_sys::window().ok_or_else(|| TransportError::Connection {
                uri: uri.clone(),
                reason: "no window".into(),
            })?;

            let response: Response = JsFuture::from(window.fetch_with_str(&uri))
                .await
                .map_err(connection)?
                .dyn_into()
                .map_err(connection)?;

            if !response.ok() {
                return Err(TransportError::Status { uri: uri.clone(), status: response.status() });
            }

            let buffer = JsFuture::from(response.array_buffer().map_err(connection)?)
                .await
                .map_err(connection)?;
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

            debug!(uri = %uri, bytes = bytes.len(), "Fetched");
            Ok(bytes)
        }
    }
}
