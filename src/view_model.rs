//! List View Models
//!
//! Typed per-context layouts for list entries. Decoding a raw item into a
//! `ListEntry` is where render dispatch by context happens; the components
//! only draw what these types describe.

use chrono::TimeZone;
use serde_json::Value;

use crate::context::{encode_segment, ListTarget, SummitContext};
use crate::models::{BuildStatus, EndpointStatus, ItemId, ListItem, Task};
use crate::tasks::task_timestamp;

/// Avatar background classes
pub const AVATAR_PALETTE: &[&str] = &[
    "bg-azure-lt",
    "bg-purple-lt",
    "bg-red-lt",
    "bg-teal-lt",
    "bg-pink-lt",
    "bg-lime-lt",
];

/// Stable colour for numeric ids, position based otherwise
pub fn avatar_color(id: &ItemId, index: usize) -> &'static str {
    let key = id.numeric().map(|n| (n % AVATAR_PALETTE.len() as u64) as usize).unwrap_or(index);
    AVATAR_PALETTE[key % AVATAR_PALETTE.len()]
}

/// First character of the title
pub fn avatar_letter(title: &str) -> String {
    title.chars().next().map(String::from).unwrap_or_else(|| "?".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub letter: String,
    pub color: &'static str,
}

impl Avatar {
    pub fn new(title: &str, id: &ItemId, index: usize) -> Self {
        Self { letter: avatar_letter(title), color: avatar_color(id, index) }
    }
}

/// Project card icon.
///
/// The distribution's own project carries the brand logo; the API has no
/// icon field so it is keyed on the slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectIcon {
    Brand,
    Generic,
}

pub const BRAND_PROJECT_SLUG: &str = "serpent-os";

impl ProjectIcon {
    pub fn for_slug(slug: &str) -> Self {
        if slug == BRAND_PROJECT_SLUG {
            ProjectIcon::Brand
        } else {
            ProjectIcon::Generic
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            ProjectIcon::Brand => "/static/img/serpent.svg#logo",
            ProjectIcon::Generic => "/static/tabler/tabler-sprite.svg#tabler-package",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub subtitle: String,
    pub href: String,
    pub icon: ProjectIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub title: String,
    pub subtitle: String,
    pub href: String,
    pub avatar: Avatar,
    pub status: Option<EndpointStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u64,
    pub build_id: String,
    pub description: String,
    pub architecture: String,
    pub status: Option<BuildStatus>,
    pub timestamp: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericRow {
    pub title: String,
    pub subtitle: String,
    pub href: String,
    pub avatar: Avatar,
}

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Project(ProjectCard),
    Builder(StatusRow),
    Endpoint(StatusRow),
    Task(TaskRow),
    Generic(GenericRow),
}

impl ListEntry {
    /// Decode one raw item according to the list context
    pub fn build<Tz: TimeZone>(
        target: &ListTarget,
        raw: Value,
        index: usize,
        tz: &Tz,
    ) -> Result<Self, serde_json::Error>
    where
        Tz::Offset: std::fmt::Display,
    {
        if target.context == SummitContext::Tasks {
            let task: Task = serde_json::from_value(raw)?;
            return Ok(ListEntry::Task(TaskRow {
                id: task.id,
                href: format!("/tasks/{}", task.id),
                timestamp: task_timestamp(&task, tz),
                status: task.build_status(),
                build_id: task.build_id,
                description: task.description,
                architecture: task.architecture,
            }));
        }

        let item: ListItem = serde_json::from_value(raw)?;
        let href = item_href(target, &item);
        let entry = match target.context {
            SummitContext::Projects | SummitContext::Collections => ListEntry::Project(ProjectCard {
                icon: ProjectIcon::for_slug(&item.slug),
                title: item.title,
                subtitle: item.subtitle,
                href,
            }),
            SummitContext::Builders | SummitContext::Endpoints => {
                let row = StatusRow {
                    avatar: Avatar::new(&item.title, &item.id, index),
                    status: item.status.as_ref().and_then(EndpointStatus::from_value),
                    title: item.title,
                    subtitle: item.subtitle,
                    href,
                };
                if target.context == SummitContext::Builders {
                    ListEntry::Builder(row)
                } else {
                    ListEntry::Endpoint(row)
                }
            }
            _ => ListEntry::Generic(GenericRow {
                avatar: Avatar::new(&item.title, &item.id, index),
                title: item.title,
                subtitle: item.subtitle,
                href,
            }),
        };
        Ok(entry)
    }

    /// Decode a whole page, failing on the first malformed item
    pub fn build_all<Tz: TimeZone>(
        target: &ListTarget,
        items: Vec<Value>,
        tz: &Tz,
    ) -> Result<Vec<Self>, serde_json::Error>
    where
        Tz::Offset: std::fmt::Display,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, raw)| ListEntry::build(target, raw, index, tz))
            .collect()
    }
}

fn item_href(target: &ListTarget, item: &ListItem) -> String {
    let slug = encode_segment(&item.slug);
    match (target.context, &target.parent) {
        (SummitContext::Projects | SummitContext::Collections, _) => format!("/~/{}", slug),
        (SummitContext::Repositories, Some(parent)) => format!("/~/{}/{}", encode_segment(parent), slug),
        (context, _) => format!("/{}/{}", context.as_str(), slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn target(context: SummitContext) -> ListTarget {
        ListTarget { context, mode: "enumerate".into(), parent: None }
    }

    fn item(id: Value, title: &str, slug: &str) -> Value {
        json!({ "id": id, "title": title, "subtitle": "sub", "slug": slug })
    }

    #[test]
    fn test_tasks_route_to_task_row_for_any_status() {
        let cases = [
            (json!(0), Some(BuildStatus::New)),
            (json!(3), Some(BuildStatus::Publishing)),
            (json!(5), Some(BuildStatus::Blocked)),
            (json!(99), None),
            (json!(256), None),
            (json!(-1), None),
            (json!("2"), None),
            (Value::Null, None),
        ];
        for (status, expected) in cases {
            let raw = json!({
                "id": 7, "buildID": "b", "description": "d", "architecture": "x86_64",
                "status": status, "tsStarted": 0, "tsEnded": 0, "allocatedBuilder": "w"
            });
            let entry = ListEntry::build(&target(SummitContext::Tasks), raw, 0, &Utc).unwrap();
            match entry {
                ListEntry::Task(row) => {
                    assert_eq!(row.id, 7);
                    assert_eq!(row.href, "/tasks/7");
                    assert_eq!(row.status, expected);
                }
                other => panic!("expected task row, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_odd_task_status_keeps_the_page() {
        let items = vec![
            json!({ "id": 1, "status": 4 }),
            json!({ "id": 2, "status": 300 }),
            json!({ "id": 3 }),
        ];
        let entries = ListEntry::build_all(&target(SummitContext::Tasks), items, &Utc).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[1], ListEntry::Task(row) if row.status.is_none()));
    }

    #[test]
    fn test_unmapped_layouts_fall_back_to_generic() {
        for context in [SummitContext::Users, SummitContext::Groups, SummitContext::Recipes, SummitContext::Repositories] {
            let entry = ListEntry::build(&target(context), item(json!(1), "alice", "alice"), 0, &Utc).unwrap();
            assert!(matches!(entry, ListEntry::Generic(_)), "{:?}", context);
        }
    }

    #[test]
    fn test_project_card_icon() {
        let brand = ListEntry::build(&target(SummitContext::Projects), item(json!(1), "Serpent OS", BRAND_PROJECT_SLUG), 0, &Utc).unwrap();
        let other = ListEntry::build(&target(SummitContext::Projects), item(json!(2), "Other", "other"), 1, &Utc).unwrap();
        match (brand, other) {
            (ListEntry::Project(a), ListEntry::Project(b)) => {
                assert_eq!(a.icon, ProjectIcon::Brand);
                assert_eq!(a.href, "/~/serpent-os");
                assert_eq!(b.icon, ProjectIcon::Generic);
            }
            other => panic!("expected project cards, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_and_endpoint_status_rows() {
        let mut raw = item(json!(3), "box", "box");
        raw["status"] = json!("Operational");
        match ListEntry::build(&target(SummitContext::Builders), raw.clone(), 0, &Utc).unwrap() {
            ListEntry::Builder(row) => assert_eq!(row.status.map(|s| s.color()), Some("green")),
            other => panic!("expected builder row, got {:?}", other),
        }
        assert!(matches!(
            ListEntry::build(&target(SummitContext::Endpoints), raw, 0, &Utc).unwrap(),
            ListEntry::Endpoint(_)
        ));
    }

    #[test]
    fn test_avatar_color_stable_for_numeric_ids() {
        assert_eq!(avatar_color(&ItemId::Numeric(7), 0), avatar_color(&ItemId::Numeric(7), 3));
        assert_eq!(avatar_color(&ItemId::Numeric(7), 0), AVATAR_PALETTE[1]);
        assert_eq!(avatar_color(&ItemId::Text("x".into()), 2), AVATAR_PALETTE[2]);
        assert_eq!(avatar_color(&ItemId::Text("x".into()), 8), AVATAR_PALETTE[2]);
    }

    #[test]
    fn test_avatar_letter() {
        assert_eq!(avatar_letter("nano"), "n");
        assert_eq!(avatar_letter(""), "?");
    }

    #[test]
    fn test_repository_href_under_parent() {
        let t = ListTarget {
            context: SummitContext::Repositories,
            mode: "enumerate".into(),
            parent: Some("serpent-os".into()),
        };
        match ListEntry::build(&t, item(json!(1), "nano", "nano"), 0, &Utc).unwrap() {
            ListEntry::Generic(row) => assert_eq!(row.href, "/~/serpent-os/nano"),
            other => panic!("expected generic row, got {:?}", other),
        }
    }

    #[test]
    fn test_build_all_rejects_malformed_item() {
        let items = vec![item(json!(1), "a", "a"), json!({ "title": "no id" })];
        assert!(ListEntry::build_all(&target(SummitContext::Users), items, &Utc).is_err());
    }
}
