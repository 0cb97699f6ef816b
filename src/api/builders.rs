//! Builder Endpoints

use serde::Serialize;

use super::{get_json, post_json, ApiError};
use crate::models::Builder;

#[derive(Debug, Serialize)]
pub struct AddBuilderArgs {
    pub nick: String,
    pub hostname: String,
}

pub async fn list_builders() -> Result<Vec<Builder>, ApiError> {
    get_json("/api/v1/builders/list").await
}

pub async fn add_builder(args: &AddBuilderArgs) -> Result<(), ApiError> {
    post_json("/api/v1/builders/add", args).await
}
