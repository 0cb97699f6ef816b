//! Build Job Endpoints

use super::{get_json, ApiError};
use crate::models::BuildJob;

pub async fn list_active_jobs() -> Result<Vec<BuildJob>, ApiError> {
    get_json("/api/v1/buildjobs/list_active").await
}
