//! Namespaces View Component
//!
//! `#namespacesList` island. The container's `summit:namespaceList`
//! attribute picks between all namespaces, one namespace's projects, or one
//! project's repositories.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use super::island::Island;
use super::placeholder::Placeholder;
use crate::api::{self, CreateRepoArgs};
use crate::context::encode_segment;
use crate::dom;
use crate::markdown::{render_summary, render_summary_inline};
use crate::models::{ItemId, NamespaceListing, Project, Repository};
use crate::view_model::Avatar;

pub const LIST_ID: &str = "namespacesList";
const ADD_REPO_BUTTON_ID: &str = "addRepoButton";
const ADD_REPO_DIALOG_ID: &str = "addRepoDialog";

/// What the namespaces container lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespacePurpose {
    All,
    Individual { namespace: String },
    Repos { namespace: String, project: String },
}

impl NamespacePurpose {
    pub fn resolve(purpose: Option<&str>, namespace: Option<String>, project: Option<String>) -> Option<Self> {
        match purpose? {
            "all" => Some(NamespacePurpose::All),
            "individual" => Some(NamespacePurpose::Individual { namespace: namespace? }),
            "repos" => Some(NamespacePurpose::Repos { namespace: namespace?, project: project? }),
            _ => None,
        }
    }
}

// ========================
// All namespaces
// ========================

#[component]
fn NamespaceCard(listing: NamespaceListing) -> impl IntoView {
    let ns = listing.ns;
    let ns_href = format!("/~/{}", encode_segment(&ns.slug));
    let projects = listing
        .projects
        .into_iter()
        .map(|p| {
            let href = format!("{}/{}", ns_href, encode_segment(&p.slug));
            let label = format!("{} / {}", ns.name, p.name);
            view! {
                <div class="list-group-item">
                    <div class="row">
                        <div class="col"><a href=href>{label}</a></div>
                        <div class="col" inner_html=render_summary_inline(&p.summary)></div>
                    </div>
                </div>
            }
        })
        .collect_view();
    view! {
        <div class="col-md-6">
            <div class="card shadow-sm">
                <div class="card-body">
                    <h3 class="card-title"><a href=ns_href>{ns.name.clone()}</a></h3>
                    <div class="markdown text-wrap" inner_html=render_summary(&ns.summary)></div>
                </div>
                <div class="list-group list-group-flush justify-text-center">
                    <div class="list-group-header">"Projects"</div>
                    {projects}
                </div>
            </div>
        </div>
        <div class="col-md-3">
            <div class="card bg-teal-lt">
                <div class="card-body">
                    <h3 class="card-title">"Coming soon(ish) ™"</h3>
                    <div class="markdown text-wrap">"We plan to allow users to create their own namespaces!"</div>
                </div>
            </div>
        </div>
    }
}

fn mount_all(island: Island) {
    let namespaces = RwSignal::new(Vec::<NamespaceListing>::new());
    spawn_local(async move {
        match api::list_namespaces().await {
            Ok(list) => {
                namespaces.set(list);
                island.mount(move || {
                    view! {
                        <For
                            each=move || namespaces.get()
                            key=|listing| listing.ns.slug.clone()
                            children=|listing| view! { <NamespaceCard listing=listing /> }
                        />
                    }
                });
            }
            Err(e) => log::error!("couldn't fetch namespaces: {}", e),
        }
    });
}

// ========================
// One namespace's projects
// ========================

/// Avatar + link row shared by projects and repositories
#[component]
fn EntityRow(avatar: Avatar, title: String, href: String, detail: String) -> impl IntoView {
    view! {
        <div class="list-group-item">
            <div class="row align-items-center">
                <div class="col-auto">
                    <span class=format!("avatar {}", avatar.color)>{avatar.letter}</span>
                </div>
                <div class="col">
                    <a href=href class="text-reset d-block">{title}</a>
                    <div class="d-block text-muted">{detail}</div>
                </div>
            </div>
        </div>
    }
}

fn mount_projects(island: Island, namespace: String) {
    let projects = RwSignal::new(Vec::<Project>::new());
    let ns_href = format!("/~/{}", encode_segment(&namespace));
    spawn_local(async move {
        match api::list_projects(&namespace).await {
            Ok(list) => projects.set(list),
            Err(e) => {
                log::error!("couldn't fetch projects of {}: {}", namespace, e);
                return;
            }
        }
        island.mount(move || {
            move || {
                projects
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, p)| {
                        let avatar = Avatar::new(&p.name, &ItemId::Numeric(p.id), index);
                        let href = format!("{}/{}", ns_href, encode_segment(&p.slug));
                        view! {
                            <EntityRow
                                avatar=avatar
                                href=href
                                title=p.name
                                detail=p.summary
                            />
                        }
                    })
                    .collect_view()
            }
        });
    });
}

// ========================
// One project's repositories
// ========================

type ReposSignal = RwSignal<Option<Vec<Repository>>>;

#[component]
fn RepositoryList(repos: ReposSignal) -> impl IntoView {
    move || match repos.get() {
        None => ().into_any(),
        Some(list) if list.is_empty() => view! {
            <Placeholder
                icon="mood-crazy-happy"
                title="Oh this is *so* new."
                subtitle="Time to add your first repository!"
            />
        }
        .into_any(),
        Some(list) => list
            .into_iter()
            .enumerate()
            .map(|(index, repo)| {
                let avatar = Avatar::new(&repo.name, &ItemId::Numeric(repo.id), index);
                view! {
                    <EntityRow
                        avatar=avatar
                        href="#".to_string()
                        title=repo.name
                        detail=repo.vcs_origin
                    />
                }
            })
            .collect_view()
            .into_any(),
    }
}

fn refresh_repos(island: Island, repos: ReposSignal, namespace: String, project: String) {
    spawn_local(async move {
        match api::list_repositories(&namespace, &project).await {
            Ok(list) => {
                repos.set(Some(list));
                island.mount(move || view! { <RepositoryList repos=repos /> });
            }
            Err(e) => log::error!("failed to fetch repository listing of {}/{}: {}", namespace, project, e),
        }
    });
}

fn add_repo(island: Island, repos: ReposSignal, namespace: String, project: String) {
    let args = CreateRepoArgs {
        upstream: dom::input_value("upstream"),
        name: dom::input_value("name"),
        build_type: "package".to_string(),
    };
    spawn_local(async move {
        match api::create_repository(&namespace, &project, &args).await {
            Ok(()) => {
                refresh_repos(island, repos, namespace, project);
                dom::hide_modal(ADD_REPO_DIALOG_ID);
            }
            Err(e) => log::error!("failed to create repo {}: {}", args.name, e),
        }
    });
}

fn mount_repos(island: Island, namespace: String, project: String) -> Result<(), JsValue> {
    let repos: ReposSignal = RwSignal::new(None);
    refresh_repos(island, repos, namespace.clone(), project.clone());

    if let Some(button) = dom::by_id(ADD_REPO_BUTTON_ID) {
        dom::listen(&button, "click", move |ev| {
            ev.prevent_default();
            add_repo(island, repos, namespace.clone(), project.clone());
        })?;
    }
    Ok(())
}

pub fn mount() -> Result<(), JsValue> {
    let Some(container) = dom::by_id(LIST_ID) else {
        return Ok(());
    };
    let purpose = NamespacePurpose::resolve(
        container.get_attribute("summit:namespaceList").as_deref(),
        container.get_attribute("summit:namespaceName"),
        container.get_attribute("summit:projectName"),
    );
    let Some(purpose) = purpose else {
        log::warn!("#{} has no usable summit:namespaceList", LIST_ID);
        return Ok(());
    };
    let Some(island) = Island::find(LIST_ID) else {
        return Ok(());
    };

    match purpose {
        NamespacePurpose::All => mount_all(island),
        NamespacePurpose::Individual { namespace } => mount_projects(island, namespace),
        NamespacePurpose::Repos { namespace, project } => mount_repos(island, namespace, project)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_purpose() {
        assert_eq!(NamespacePurpose::resolve(Some("all"), None, None), Some(NamespacePurpose::All));
        assert_eq!(
            NamespacePurpose::resolve(Some("individual"), Some("serpent-os".into()), None),
            Some(NamespacePurpose::Individual { namespace: "serpent-os".into() })
        );
        assert_eq!(
            NamespacePurpose::resolve(Some("repos"), Some("serpent-os".into()), Some("base".into())),
            Some(NamespacePurpose::Repos { namespace: "serpent-os".into(), project: "base".into() })
        );
        assert_eq!(NamespacePurpose::resolve(Some("repos"), Some("serpent-os".into()), None), None);
        assert_eq!(NamespacePurpose::resolve(Some("other"), None, None), None);
        assert_eq!(NamespacePurpose::resolve(None, None, None), None);
    }
}
