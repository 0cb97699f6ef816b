//! Pagination Strip Component
//!
//! Page controls under the list. Hidden for plain and empty payloads.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::summit_list::ListController;
use crate::context::MODE_ENUMERATE;
use crate::pagination::PageWindow;
use crate::store::ListStateStoreFields;

#[component]
pub fn PaginationStrip(controller: ListController) -> impl IntoView {
    let store = controller.store;
    move || {
        store
            .pagination()
            .get()
            .map(|window| view! { <PageLinks controller=controller window=window /> })
    }
}

/// Click handler that navigates to `page`, or does nothing for `None`
fn go_to(controller: ListController, page: Option<u32>) -> impl Fn(MouseEvent) + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(page) = page {
            controller.refresh(MODE_ENUMERATE.to_string(), page);
        }
    }
}

#[component]
fn PageLinks(controller: ListController, window: PageWindow) -> impl IntoView {
    let prev = window.previous_page();
    let next = window.next_page();
    let last = window.last_page();

    let edge_class = |enabled: bool| if enabled { "page-item" } else { "page-item disabled" };
    let tab_index = |enabled: bool| if enabled { "0" } else { "-1" };

    view! {
        <ul class="pagination m-0 ms-auto">
            <li class=edge_class(prev.is_some())>
                <a
                    class="page-link"
                    href="#"
                    tabindex=tab_index(prev.is_some())
                    aria-disabled=prev.is_none().to_string()
                    on:click=go_to(controller, prev)
                >
                    "prev"
                </a>
            </li>

            {window.shows_first_jump().then(|| view! {
                <li class="page-item">
                    <a class="page-link" href="#" on:click=go_to(controller, Some(0))>"1"</a>
                </li>
                <li class="page-item disabled">
                    <span class="page-link">"…"</span>
                </li>
            })}

            {window.pages().map(|page| {
                let class = if page == window.page { "page-item active" } else { "page-item" };
                view! {
                    <li class=class>
                        <a class="page-link" href="#" on:click=go_to(controller, Some(page))>{page + 1}</a>
                    </li>
                }
            }).collect_view()}

            {window.shows_last_jump().then(|| view! {
                <li class="page-item disabled">
                    <span class="page-link">"…"</span>
                </li>
                <li class="page-item">
                    <a class="page-link" href="#" on:click=go_to(controller, Some(last))>{last + 1}</a>
                </li>
            })}

            <li class=edge_class(next.is_some())>
                <a
                    class="page-link"
                    href="#"
                    tabindex=tab_index(next.is_some())
                    aria-disabled=next.is_none().to_string()
                    on:click=go_to(controller, next)
                >
                    "next"
                </a>
            </li>
        </ul>
    }
}
