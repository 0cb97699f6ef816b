//! Builders View Component
//!
//! `#buildersList` island with the add-builder dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use super::island::Island;
use super::placeholder::Placeholder;
use crate::api::{self, AddBuilderArgs};
use crate::dom;
use crate::models::Builder;
use crate::view_model::avatar_letter;

pub const LIST_ID: &str = "buildersList";
const ADD_BUTTON_ID: &str = "addBuilderButton";
const ADD_DIALOG_ID: &str = "addBuilderDialog";

/// `None` until the first successful fetch
type BuildersSignal = RwSignal<Option<Vec<Builder>>>;

#[component]
fn BuilderRow(builder: Builder) -> impl IntoView {
    view! {
        <div class="list-group-item">
            <div class="row align-items-center">
                <div class="col-auto">
                    <span class="status-indicator status-yellow status-indicator-animated">
                        <span class="status-indicator-circle"></span>
                        <span class="status-indicator-circle"></span>
                        <span class="status-indicator-circle"></span>
                    </span>
                </div>
                <div class="col-auto">
                    <span class="avatar">{avatar_letter(&builder.display_name)}</span>
                </div>
                <div class="col">
                    <a href="#" class="text-reset d-block">{builder.display_name}</a>
                    <div class="text-muted">{builder.uri}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BuildersList(builders: BuildersSignal) -> impl IntoView {
    move || match builders.get() {
        None => ().into_any(),
        Some(list) if list.is_empty() => view! {
            <Placeholder
                icon="mood-confuzed"
                title="Look at all those builders"
                subtitle="Hey, where'd they go?"
            />
        }
        .into_any(),
        Some(list) => list
            .into_iter()
            .map(|builder| view! { <BuilderRow builder=builder /> })
            .collect_view()
            .into_any(),
    }
}

fn refresh(island: Island, builders: BuildersSignal) {
    spawn_local(async move {
        match api::list_builders().await {
            Ok(list) => {
                log::debug!("loaded {} builders", list.len());
                builders.set(Some(list));
                island.mount(move || view! { <BuildersList builders=builders /> });
            }
            Err(e) => log::error!("failed to refresh builders: {}", e),
        }
    });
}

fn add_builder(island: Island, builders: BuildersSignal) {
    let args = AddBuilderArgs {
        nick: dom::input_value("nick"),
        hostname: dom::input_value("hostname"),
    };
    spawn_local(async move {
        match api::add_builder(&args).await {
            Ok(()) => {
                refresh(island, builders);
                dom::hide_modal(ADD_DIALOG_ID);
            }
            Err(e) => log::error!("failed to add builder {}: {}", args.nick, e),
        }
    });
}

pub fn mount() -> Result<(), JsValue> {
    let Some(island) = Island::find(LIST_ID) else {
        return Ok(());
    };
    let builders: BuildersSignal = RwSignal::new(None);
    refresh(island, builders);

    if let Some(button) = dom::by_id(ADD_BUTTON_ID) {
        dom::listen(&button, "click", move |ev| {
            ev.prevent_default();
            add_builder(island, builders);
        })?;
    }
    Ok(())
}
