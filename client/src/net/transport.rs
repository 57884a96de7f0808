//! Browser [`Transport`] backed by `gloo-net` (`fetch`).
//!
//! Without `csr` every send fails with a transport error, so pages and
//! their helpers still compile and degrade to their error paths natively.
//!
//! ERROR HANDLING
//! ==============
//! `fetch` rejections, body construction failures, and timeouts all map to
//! [`ApiError::Transport`]; non-2xx statuses are returned as responses and
//! classified by the caller.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use retina::{ApiError, ApiRequest, ApiResponse, AppConfig, Transport};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "HTTP is only available in the browser";

#[cfg(any(test, feature = "csr"))]
fn timeout_message(limit: Duration) -> String {
    format!("request timed out after {}s", limit.as_secs())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport {
    timeout: Option<Duration>,
}

impl GlooTransport {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { timeout: config.request_timeout }
    }
}

#[cfg(feature = "csr")]
fn js_error(e: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

#[cfg(feature = "csr")]
fn form_data(file: &retina::http::MultipartFile) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)
        .map_err(|e| js_error(&e))?;
    form.append_with_blob_and_filename(&file.field, &blob, &file.filename)
        .map_err(|e| js_error(&e))?;
    Ok(form)
}

#[cfg(feature = "csr")]
async fn fetch(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::Request;
    use retina::http::{Method, RequestBody};

    let transport_error = |e: gloo_net::Error| ApiError::Transport(e.to_string());

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    if let Some(value) = request.authorization() {
        builder = builder.header("Authorization", &value);
    }
    let prepared = match &request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(value),
        RequestBody::Multipart(file) => builder.body(form_data(file)?),
    }
    .map_err(transport_error)?;

    let resp = prepared.send().await.map_err(transport_error)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport_error)?;
    log::debug!("{} {} -> {status}", request.method.as_str(), request.url);
    Ok(ApiResponse::new(status, body))
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let Some(limit) = self.timeout else {
                return fetch(request).await;
            };
            let call = Box::pin(fetch(request));
            let deadline = Box::pin(gloo_timers::future::sleep(limit));
            match select(call, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    log::warn!("{}", timeout_message(limit));
                    Err(ApiError::Transport(timeout_message(limit)))
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, self.timeout);
            Err(ApiError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}
