//! Frontend Models
//!
//! Wire types matching the Summit REST API.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Item identifier. The API emits numbers for most entities but some
/// collections key on strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(u64),
    Text(String),
}

impl ItemId {
    /// Numeric value of the id, parsing textual ids when possible
    pub fn numeric(&self) -> Option<u64> {
        match self {
            ItemId::Numeric(n) => Some(*n),
            ItemId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Minimal entity shape consumed by the generic renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub slug: String,
    /// Context specific status (builders, endpoints)
    #[serde(default)]
    pub status: Option<Value>,
}

/// Pagination fields of the paginated envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub num_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One enumeration response.
///
/// Items stay raw until the view model decodes them, since their shape
/// depends on the list context.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    pub pagination: Option<Pagination>,
}

impl<'de> Deserialize<'de> for Page {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Page { items, pagination: None }),
            Value::Object(mut envelope) => {
                let items = match envelope.remove("items") {
                    Some(Value::Array(items)) => items,
                    Some(other) => {
                        return Err(D::Error::custom(format!("`items` must be an array, found {}", other)))
                    }
                    None => return Err(D::Error::missing_field("items")),
                };
                let pagination = Pagination::deserialize(Value::Object(envelope)).map_err(D::Error::custom)?;
                Ok(Page { items, pagination: Some(pagination) })
            }
            other => Err(D::Error::custom(format!(
                "expected a list or a paginated envelope, found {}",
                other
            ))),
        }
    }
}

// ========================
// Tasks
// ========================

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStatus {
    New,
    Failed,
    Building,
    Publishing,
    Completed,
    Blocked,
}

impl BuildStatus {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(BuildStatus::New),
            1 => Some(BuildStatus::Failed),
            2 => Some(BuildStatus::Building),
            3 => Some(BuildStatus::Publishing),
            4 => Some(BuildStatus::Completed),
            5 => Some(BuildStatus::Blocked),
            _ => None,
        }
    }

    /// Anything but an in-range integer code is unknown
    pub fn from_value(value: &Value) -> Option<Self> {
        value
            .as_u64()
            .and_then(|code| u8::try_from(code).ok())
            .and_then(BuildStatus::from_code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuildStatus::New => "Scheduled",
            BuildStatus::Failed => "Failed",
            BuildStatus::Building => "Building",
            BuildStatus::Publishing => "Publishing",
            BuildStatus::Completed => "Completed",
            BuildStatus::Blocked => "Blocked",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BuildStatus::New => "yellow",
            BuildStatus::Failed => "red",
            BuildStatus::Building => "lime",
            BuildStatus::Publishing => "teal",
            BuildStatus::Completed => "purple",
            BuildStatus::Blocked => "orange",
        }
    }

    /// Whether the status dot pulses (work in progress or attention needed)
    pub fn animated(&self) -> bool {
        matches!(self, BuildStatus::Failed | BuildStatus::Building | BuildStatus::Publishing)
    }
}

/// A build task as emitted by `/api/v1/tasks/enumerate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    #[serde(rename = "buildID", default)]
    pub build_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub source_path: String,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub ts_started: i64,
    #[serde(default)]
    pub ts_ended: i64,
    #[serde(default)]
    pub allocated_builder: String,
}

impl Task {
    pub fn build_status(&self) -> Option<BuildStatus> {
        BuildStatus::from_value(&self.status)
    }

    pub fn has_ended(&self) -> bool {
        self.ts_ended != 0
    }
}

// ========================
// Builders / Endpoints
// ========================

/// Enrolment status of a builder or endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointStatus {
    AwaitingAcceptance,
    AwaitingEnrolment,
    Failed,
    Operational,
}

impl EndpointStatus {
    /// Accepts either the numeric code or the variant name
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_u64()? {
                0 => Some(EndpointStatus::AwaitingAcceptance),
                1 => Some(EndpointStatus::AwaitingEnrolment),
                2 => Some(EndpointStatus::Failed),
                3 => Some(EndpointStatus::Operational),
                _ => None,
            },
            Value::String(s) => match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
                "awaitingacceptance" => Some(EndpointStatus::AwaitingAcceptance),
                "awaitingenrolment" | "awaitingenrollment" => Some(EndpointStatus::AwaitingEnrolment),
                "failed" => Some(EndpointStatus::Failed),
                "operational" => Some(EndpointStatus::Operational),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EndpointStatus::AwaitingAcceptance => "orange",
            EndpointStatus::AwaitingEnrolment => "grey",
            EndpointStatus::Failed => "red",
            EndpointStatus::Operational => "green",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EndpointStatus::AwaitingAcceptance => "Awaiting acceptance",
            EndpointStatus::AwaitingEnrolment => "Awaiting enrolment",
            EndpointStatus::Failed => "Failed",
            EndpointStatus::Operational => "Operational",
        }
    }
}

/// Builder entry of `/api/v1/builders/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Builder {
    pub display_name: String,
    #[serde(default)]
    pub uri: String,
}

// ========================
// Build jobs
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Accepted,
    Building,
    Syncing,
    Finished,
    Failed,
}

impl JobStatus {
    /// Status arrives as a number or a numeric string
    pub fn from_value(value: &Value) -> Option<Self> {
        let code = match value {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        match code {
            0 => Some(JobStatus::Pending),
            1 => Some(JobStatus::Accepted),
            2 => Some(JobStatus::Building),
            3 => Some(JobStatus::Syncing),
            4 => Some(JobStatus::Finished),
            5 => Some(JobStatus::Failed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Accepted => "Accepted",
            JobStatus::Building => "Building",
            JobStatus::Syncing => "Syncing",
            JobStatus::Finished => "Finished",
            JobStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            JobStatus::Pending => "badge bg-info-lt",
            JobStatus::Finished => "badge bg-success-lt",
            JobStatus::Failed => "badge bg-red-lt",
            JobStatus::Accepted | JobStatus::Building | JobStatus::Syncing => "badge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildJob {
    pub id: u64,
    pub status: Value,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub reference: String,
}

impl BuildJob {
    pub fn job_status(&self) -> Option<JobStatus> {
        JobStatus::from_value(&self.status)
    }
}

// ========================
// Namespaces
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
}

/// Entry of `/api/v1/namespaces/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceListing {
    pub ns: Namespace,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub vcs_origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_page() {
        let page: Page = serde_json::from_value(json!([{ "id": 1, "title": "a" }])).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.pagination.is_none());
    }

    #[test]
    fn test_paginated_envelope() {
        let page: Page = serde_json::from_value(json!({
            "items": [],
            "page": 2,
            "numPages": 5,
            "hasNext": true,
            "hasPrevious": true
        }))
        .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(
            page.pagination,
            Some(Pagination { page: 2, num_pages: 5, has_next: true, has_previous: true })
        );
    }

    #[test]
    fn test_page_rejects_other_shapes() {
        assert!(serde_json::from_value::<Page>(json!({ "page": 0 })).is_err());
        assert!(serde_json::from_value::<Page>(json!({ "items": {} })).is_err());
        assert!(serde_json::from_value::<Page>(json!("nope")).is_err());
    }

    #[test]
    fn test_item_id_numeric() {
        assert_eq!(ItemId::Numeric(7).numeric(), Some(7));
        assert_eq!(ItemId::Text("12".into()).numeric(), Some(12));
        assert_eq!(ItemId::Text("abc".into()).numeric(), None);
    }

    #[test]
    fn test_task_wire_names() {
        let task: Task = serde_json::from_value(json!({
            "id": 3,
            "buildID": "nano-1",
            "description": "Build nano",
            "architecture": "x86_64",
            "status": 4,
            "tsStarted": 10,
            "tsEnded": 70,
            "allocatedBuilder": "b1"
        }))
        .unwrap();
        assert_eq!(task.build_id, "nano-1");
        assert_eq!(task.build_status(), Some(BuildStatus::Completed));
        assert!(task.has_ended());
    }

    #[test]
    fn test_task_without_status_is_unknown() {
        let task: Task = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(task.status, Value::Null);
        assert_eq!(task.build_status(), None);
    }

    #[test]
    fn test_build_status_table() {
        assert_eq!(BuildStatus::from_code(0), Some(BuildStatus::New));
        assert_eq!(BuildStatus::from_code(1), Some(BuildStatus::Failed));
        assert_eq!(BuildStatus::from_code(5), Some(BuildStatus::Blocked));
        assert_eq!(BuildStatus::from_code(6), None);
        assert_eq!(BuildStatus::from_value(&json!(2)), Some(BuildStatus::Building));
        for odd in [json!(256), json!(-1), json!("2"), json!(1.5), Value::Null] {
            assert_eq!(BuildStatus::from_value(&odd), None, "{}", odd);
        }
        assert_eq!(BuildStatus::New.label(), "Scheduled");
        assert_eq!(BuildStatus::Blocked.color(), "orange");
        assert!(BuildStatus::Building.animated());
        assert!(!BuildStatus::Completed.animated());
    }

    #[test]
    fn test_endpoint_status_colors() {
        assert_eq!(EndpointStatus::from_value(&json!(0)), Some(EndpointStatus::AwaitingAcceptance));
        assert_eq!(EndpointStatus::from_value(&json!("AwaitingEnrolment")), Some(EndpointStatus::AwaitingEnrolment));
        assert_eq!(EndpointStatus::from_value(&json!("operational")).map(|s| s.color()), Some("green"));
        assert_eq!(EndpointStatus::Failed.color(), "red");
        assert_eq!(EndpointStatus::AwaitingEnrolment.color(), "grey");
        assert_eq!(EndpointStatus::from_value(&json!(9)), None);
    }

    #[test]
    fn test_job_status_parsing() {
        assert_eq!(JobStatus::from_value(&json!(4)), Some(JobStatus::Finished));
        assert_eq!(JobStatus::from_value(&json!("5")), Some(JobStatus::Failed));
        assert_eq!(JobStatus::from_value(&json!("x")), None);
        assert_eq!(JobStatus::Pending.badge_class(), "badge bg-info-lt");
    }
}
