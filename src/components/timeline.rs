//! Timeline Component
//!
//! Latest tasks on the landing page (`#summit-events`).

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::island::Island;
use super::sprite_icon::{tabler, SpriteIcon};
use crate::api;
use crate::models::{BuildStatus, Task};
use crate::tasks::{format_timestamp, timeline_title};

pub const TIMELINE_ID: &str = "summit-events";

#[derive(Debug, Clone, PartialEq)]
enum TimelineState {
    Failed,
    Ready(Vec<Task>),
}

impl TimelineState {
    fn settle(result: Result<Vec<Task>, api::ApiError>, limit: usize) -> Self {
        match result {
            Ok(mut tasks) => {
                tasks.truncate(limit);
                TimelineState::Ready(tasks)
            }
            Err(e) => {
                log::error!("timeline refresh failed: {}", e);
                TimelineState::Failed
            }
        }
    }
}

/// Icon class and tabler glyph for a task's status
fn event_icon(status: Option<BuildStatus>) -> (&'static str, &'static str) {
    match status {
        Some(BuildStatus::Failed) => ("timeline-event-icon bg-red-lt", "x"),
        Some(BuildStatus::Completed) => ("timeline-event-icon bg-purple-lt", "check"),
        _ => ("timeline-event-icon", "reload"),
    }
}

#[component]
fn TimelineEvent(task: Task) -> impl IntoView {
    let (icon_class, glyph) = event_icon(task.build_status());
    let started = format_timestamp(task.ts_started, &Local);
    let title = timeline_title(&task);
    view! {
        <li class="timeline-event">
            <div class=icon_class>
                <SpriteIcon href=tabler(glyph) />
            </div>
            <div class="card timeline-event-card">
                <div class="card-body">
                    <div class="text-muted float-end">{started}</div>
                    <h4>{title}</h4>
                    <p class="text-muted">{task.description}</p>
                </div>
            </div>
        </li>
    }
}

/// The server markup stays until the first fetch settles either way
pub fn mount(limit: usize) {
    let Some(island) = Island::find(TIMELINE_ID) else {
        return;
    };
    spawn_local(async move {
        let state = TimelineState::settle(api::recent_tasks().await, limit);
        island.mount(move || match state {
            TimelineState::Failed => "oops".into_any(),
            TimelineState::Ready(tasks) => view! {
                <ul class="timeline">
                    {tasks.into_iter().map(|task| view! { <TimelineEvent task=task /> }).collect_view()}
                </ul>
            }
            .into_any(),
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_icon() {
        assert_eq!(event_icon(Some(BuildStatus::Failed)).1, "x");
        assert_eq!(event_icon(Some(BuildStatus::Completed)).1, "check");
        assert_eq!(event_icon(Some(BuildStatus::Building)).1, "reload");
        assert_eq!(event_icon(None).1, "reload");
    }

    #[test]
    fn test_settle_truncates_and_fails_soft() {
        let tasks: Vec<Task> = (1..=4)
            .map(|id| serde_json::from_value(serde_json::json!({ "id": id, "status": 2 })).unwrap())
            .collect();
        match TimelineState::settle(Ok(tasks), 2) {
            TimelineState::Ready(tasks) => assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]),
            other => panic!("expected ready, got {:?}", other),
        }
        let failed = TimelineState::settle(Err(api::ApiError::Form("x".into())), 2);
        assert_eq!(failed, TimelineState::Failed);
    }
}
