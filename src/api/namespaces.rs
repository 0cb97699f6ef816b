//! Namespace & Repository Endpoints

use serde::Serialize;

use super::{get_json, post_json, ApiError};
use crate::context::encode_segment;
use crate::models::{NamespaceListing, Project, Repository};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepoArgs {
    pub upstream: String,
    pub name: String,
    pub build_type: String,
}

pub fn projects_uri(namespace: &str) -> String {
    format!("/api/v1/namespaces/{}/projects", encode_segment(namespace))
}

pub fn repositories_uri(namespace: &str, project: &str, action: &str) -> String {
    format!(
        "/api/v1/repositories/{}/{}/{}",
        encode_segment(namespace),
        encode_segment(project),
        action
    )
}

pub async fn list_namespaces() -> Result<Vec<NamespaceListing>, ApiError> {
    get_json("/api/v1/namespaces/list").await
}

pub async fn list_projects(namespace: &str) -> Result<Vec<Project>, ApiError> {
    get_json(&projects_uri(namespace)).await
}

pub async fn list_repositories(namespace: &str, project: &str) -> Result<Vec<Repository>, ApiError> {
    get_json(&repositories_uri(namespace, project, "list")).await
}

pub async fn create_repository(namespace: &str, project: &str, args: &CreateRepoArgs) -> Result<(), ApiError> {
    post_json(&repositories_uri(namespace, project, "create"), args).await
}
