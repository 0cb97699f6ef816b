//! Summit List Component
//!
//! Generic list island: resolves the container's context, fetches pages and
//! renders them through the view models.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::island::Island;
use super::list_entry::ListEntryView;
use super::pagination_strip::PaginationStrip;
use super::placeholder::Placeholder;
use crate::api::{self, ApiError};
use crate::config::SummitConfig;
use crate::context::{ListTarget, SummitContext};
use crate::dom;
use crate::models::Page;
use crate::pagination::PageWindow;
use crate::store::{store_apply, ListState, ListStateStoreFields, ListStore, Listing, RequestSequence};
use crate::view_model::ListEntry;

pub const LIST_ID: &str = "summitList";
pub const PAGINATION_ID: &str = "summitPagination";

/// Owns one list container's target, view state and fetch sequencing
#[derive(Clone, Copy)]
pub struct ListController {
    target: StoredValue<ListTarget>,
    sequence: StoredValue<RequestSequence>,
    pub store: ListStore,
    page_window: u32,
    list_island: Island,
    strip_island: Option<Island>,
}

impl ListController {
    pub fn new(target: ListTarget, page_window: u32, list_island: Island, strip_island: Option<Island>) -> Self {
        Self {
            target: StoredValue::new(target),
            sequence: StoredValue::new(RequestSequence::default()),
            store: Store::new(ListState::default()),
            page_window,
            list_island,
            strip_island,
        }
    }

    pub fn context(&self) -> SummitContext {
        self.target.with_value(|t| t.context)
    }

    /// The container's declared mode
    pub fn mode(&self) -> String {
        self.target.with_value(|t| t.mode.clone())
    }

    /// Fetch a page and replace the list. Failures are logged and the
    /// current view stays, server markup included until the first success.
    /// A response overtaken by a newer request is dropped.
    pub fn refresh(self, mode: String, page_number: u32) {
        let target = self.target.get_value();
        let mut ticket = 0;
        self.sequence.update_value(|seq| ticket = seq.issue());

        spawn_local(async move {
            let result = api::fetch_list(&target, &mode, page_number).await;
            if !self.sequence.with_value(|seq| seq.is_current(ticket)) {
                log::debug!("dropping stale {} page {} (ticket {})", target.context, page_number, ticket);
                return;
            }
            match result.and_then(|page| self.settle(&target, page)) {
                Ok(state) => {
                    store_apply(&self.store, state);
                    self.attach();
                }
                Err(e) => log::error!("refreshing {} failed: {}", target.context, e),
            }
        });
    }

    /// Take over the containers once there is something to show
    fn attach(self) {
        self.list_island.mount(move || view! { <SummitList controller=self /> });
        if let Some(strip) = self.strip_island {
            strip.mount(move || view! { <PaginationStrip controller=self /> });
        }
    }

    fn settle(&self, target: &ListTarget, page: Page) -> Result<ListState, ApiError> {
        let entries = ListEntry::build_all(target, page.items, &Local)?;
        let pagination = page.pagination.map(|p| PageWindow::compute(&p, self.page_window));
        Ok(ListState::settled(entries, pagination))
    }
}

#[component]
pub fn SummitList(controller: ListController) -> impl IntoView {
    let store = controller.store;
    move || match store.listing().get() {
        Listing::Pending => ().into_any(),
        Listing::Empty => view! {
            <Placeholder
                icon="mood-suprised"
                title="This page has intentionally been left blank"
                subtitle="How does that work, though? Like, clearly it isn't blank."
            />
        }
        .into_any(),
        Listing::Entries(entries) => entries
            .into_iter()
            .map(|entry| view! { <ListEntryView entry=entry /> })
            .collect_view()
            .into_any(),
    }
}

/// Wire the list and pagination islands if the page has a list container.
/// Both mount with the first successful fetch.
pub fn mount(config: &SummitConfig) -> Option<ListController> {
    let container = dom::by_id(LIST_ID)?;
    let list_island = Island::find(LIST_ID)?;
    let target = ListTarget::resolve(
        container.get_attribute("summit:context"),
        container.get_attribute("summit:mode"),
        container.get_attribute("summit:parent"),
    );
    let target = match target {
        Ok(target) => target,
        Err(e) => {
            log::error!("cannot integrate #{}: {}", LIST_ID, e);
            return None;
        }
    };
    log::info!("integrating {} list ({})", target.context, target.mode);

    let strip_island = Island::find(PAGINATION_ID);
    let controller = ListController::new(target, config.page_window, list_island, strip_island);
    controller.refresh(controller.mode(), 0);
    Some(controller)
}
