//! List Endpoints
//!
//! Generic enumerate/create calls shared by every list context.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{get_json, post_json, ApiError};
use crate::context::{ListTarget, SummitContext};
use crate::models::{Page, Task};

/// Body of `POST {base}/create`
#[derive(Debug, Serialize)]
pub struct CreateRequest {
    pub request: Map<String, Value>,
}

pub async fn fetch_list(target: &ListTarget, mode: &str, page_number: u32) -> Result<Page, ApiError> {
    get_json(&target.build_uri(mode, page_number)).await
}

pub async fn create_item(context: SummitContext, fields: Map<String, Value>) -> Result<(), ApiError> {
    post_json(&context.create_uri(), &CreateRequest { request: fields }).await
}

/// Most recent tasks for the home timeline
pub async fn recent_tasks() -> Result<Vec<Task>, ApiError> {
    let page: Page = get_json("/api/v1/tasks/enumerate").await?;
    page.items
        .into_iter()
        .map(|raw| serde_json::from_value(raw).map_err(ApiError::from))
        .collect()
}
