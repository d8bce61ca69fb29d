//! Fetch API transport.
//!
//! Requests are same-origin and carry the session cookie. No timeout is
//! applied here; the browser's own network timeout governs.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::core::api::{ApiClient, FormField, FormRequest, HttpResponse, Transport};
use crate::core::error::ApiError;
use crate::core::token::DocumentTokenProvider;
use crate::utils::dom;

/// API client wired to the browser: Fetch for I/O, the document for tokens.
pub type BrowserApi = ApiClient<BrowserTransport, DocumentTokenProvider>;

/// Transport backed by `window.fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type File = File;

    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(path).send().await.map_err(network_error)?;
        Ok(read_response(response).await)
    }

    async fn post_form(&self, request: FormRequest<File>) -> Result<HttpResponse, ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Network(dom::js_error_message(&e)))?;
        for field in &request.fields {
            match field {
                FormField::Text { name, value } => form.append_with_str(name, value),
                FormField::File {
                    name,
                    file,
                    file_name,
                } => form.append_with_blob_and_filename(name, file, file_name),
            }
            .map_err(|e| ApiError::Network(dom::js_error_message(&e)))?;
        }

        let builder = request
            .headers
            .iter()
            .fold(Request::post(request.path), |builder, (name, value)| {
                builder.header(name, value)
            });

        let response = builder
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        Ok(read_response(response).await)
    }
}

async fn read_response(response: Response) -> HttpResponse {
    HttpResponse {
        status: response.status(),
        body: response.text().await.ok(),
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
