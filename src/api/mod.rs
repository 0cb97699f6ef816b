//! REST Bindings
//!
//! Thin wrappers over `fetch` for the Summit API, organized by domain.

mod builders;
mod error;
mod jobs;
mod list;
mod namespaces;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

pub use builders::*;
pub use error::ApiError;
pub use jobs::*;
pub use list::*;
pub use namespaces::*;

/// Issue a request and fail on anything but 2xx
async fn send(uri: &str, request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request)).await?.dyn_into()?;
    if !response.ok() {
        return Err(ApiError::Status {
            uri: uri.to_string(),
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response)
}

fn request(uri: &str, init: &RequestInit) -> Result<Request, ApiError> {
    init.set_credentials(RequestCredentials::SameOrigin);
    let request = Request::new_with_str_and_init(uri, init)?;
    request.headers().set("Accept", "application/json")?;
    Ok(request)
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(uri: &str) -> Result<T, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let response = send(uri, request(uri, &init)?).await?;
    let text = JsFuture::from(response.text()?).await?;
    Ok(serde_json::from_str(&text.as_string().unwrap_or_default())?)
}

/// POST a JSON body, discarding the response payload
pub async fn post_json<B: Serialize>(uri: &str, body: &B) -> Result<(), ApiError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&serde_json::to_string(body)?.into());
    let request = request(uri, &init)?;
    request.headers().set("Content-Type", "application/json")?;
    send(uri, request).await?;
    Ok(())
}
