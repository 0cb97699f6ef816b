//! Task Row Component
//!
//! List row for a build task with its status badge.

use leptos::prelude::*;

use crate::models::BuildStatus;
use crate::view_model::TaskRow;

/// Coloured status pill. Unknown codes render as a red "Unknown".
#[component]
pub fn BuildStatusBadge(status: Option<BuildStatus>) -> impl IntoView {
    let (color, label, animated) = match status {
        Some(s) => (s.color(), s.label(), s.animated()),
        None => ("red", "Unknown", true),
    };
    let dot_class = if animated { "status-dot status-dot-animated" } else { "status-dot" };
    view! {
        <span class=format!("status status-{}", color)>
            <span class=dot_class></span>
            {label}
        </span>
    }
}

#[component]
pub fn TaskRowView(row: TaskRow) -> impl IntoView {
    view! {
        <div class="list-group-item list-group-item-hoverable">
            <div class="row align-items-center">
                <div class="col-auto mx-2">
                    <span class="avatar avatar-sm">"#" {row.id}</span>
                </div>
                <div class="col mx-2">
                    <a class="d-block stretched-link" href=row.href>{row.build_id}</a>
                    <div class="d-block">{row.description}</div>
                </div>
                <div class="col-sm-12 col-lg-2 col-md-2">
                    <small class="text-muted">{row.timestamp}</small>
                </div>
                <div class="col-auto">
                    <span class="badge badge-outline text-secondary">{row.architecture}</span>
                </div>
                <div class="col-auto mx-2">
                    <BuildStatusBadge status=row.status />
                </div>
            </div>
        </div>
    }
}
