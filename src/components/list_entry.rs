//! List Entry Components
//!
//! One layout per view-model variant.

use leptos::prelude::*;

use super::sprite_icon::SpriteIcon;
use super::task_row::TaskRowView;
use crate::view_model::{Avatar, GenericRow, ListEntry, ProjectCard, StatusRow};

#[component]
pub fn ListEntryView(entry: ListEntry) -> impl IntoView {
    match entry {
        ListEntry::Project(card) => view! { <ProjectCardView card=card /> }.into_any(),
        ListEntry::Builder(row) | ListEntry::Endpoint(row) => view! { <StatusRowView row=row /> }.into_any(),
        ListEntry::Task(row) => view! { <TaskRowView row=row /> }.into_any(),
        ListEntry::Generic(row) => view! { <GenericRowView row=row /> }.into_any(),
    }
}

#[component]
fn AvatarBadge(avatar: Avatar) -> impl IntoView {
    view! { <span class=format!("avatar {}", avatar.color)>{avatar.letter}</span> }
}

/// Card in the project grid
#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    view! {
        <div class="col-md-6 col-lg-4">
            <div class="card card-sm">
                <div class="card-body">
                    <div class="row align-items-center">
                        <div class="col-auto">
                            <span class="avatar avatar-md bg-transparent">
                                <SpriteIcon href=card.icon.href() icon_class="icon icon-lg" />
                            </span>
                        </div>
                        <div class="col text-truncate">
                            <a href=card.href class="text-reset d-block fw-bold stretched-link">{card.title}</a>
                            <div class="text-muted text-truncate">{card.subtitle}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Builder/endpoint row with a status dot
#[component]
fn StatusRowView(row: StatusRow) -> impl IntoView {
    let (color, label) = match row.status {
        Some(status) => (status.color(), status.label()),
        None => ("grey", "Unknown"),
    };
    view! {
        <div class="list-group-item">
            <div class="row align-items-center">
                <div class="col-auto">
                    <span class=format!("status-dot status-{}", color) title=label></span>
                </div>
                <div class="col-auto">
                    <AvatarBadge avatar=row.avatar />
                </div>
                <div class="col text-truncate">
                    <a href=row.href class="text-reset d-block">{row.title}</a>
                    <div class="d-block text-muted text-truncate">{row.subtitle}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn GenericRowView(row: GenericRow) -> impl IntoView {
    view! {
        <div class="list-group-item">
            <div class="row align-items-center">
                <div class="col-auto">
                    <AvatarBadge avatar=row.avatar />
                </div>
                <div class="col text-truncate">
                    <a href=row.href class="text-reset d-block">{row.title}</a>
                    <div class="d-block text-muted text-truncate">{row.subtitle}</div>
                </div>
            </div>
        </div>
    }
}
