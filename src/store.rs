//! List View State
//!
//! Uses Leptos reactive_stores so the list and pagination islands react to
//! the same fetch independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::pagination::PageWindow;
use crate::view_model::ListEntry;

/// What the list container currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing {
    /// Nothing fetched yet. The island is not mounted in this state.
    #[default]
    Pending,
    /// Placeholder panel
    Empty,
    Entries(Vec<ListEntry>),
}

/// List island state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    pub listing: Listing,
    /// Pagination strip, only for non-empty paginated payloads
    pub pagination: Option<PageWindow>,
}

impl ListState {
    /// State after a successful fetch. An empty page never shows a strip.
    pub fn settled(entries: Vec<ListEntry>, pagination: Option<PageWindow>) -> Self {
        if entries.is_empty() {
            Self { listing: Listing::Empty, pagination: None }
        } else {
            Self { listing: Listing::Entries(entries), pagination }
        }
    }
}

pub type ListStore = Store<ListState>;

/// Replace the whole list view in one pass
pub fn store_apply(store: &ListStore, state: ListState) {
    store.listing().set(state.listing);
    store.pagination().set(state.pagination);
}

/// Monotonic fetch tickets. Only the newest ticket's response may render.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pagination;
    use crate::view_model::{Avatar, GenericRow};

    fn entry() -> ListEntry {
        ListEntry::Generic(GenericRow {
            title: "alice".into(),
            subtitle: String::new(),
            href: "/users/alice".into(),
            avatar: Avatar { letter: "a".into(), color: "bg-azure-lt" },
        })
    }

    fn window() -> PageWindow {
        PageWindow::compute(&Pagination { page: 0, num_pages: 3, has_next: true, has_previous: false }, 10)
    }

    #[test]
    fn test_empty_page_shows_placeholder_without_strip() {
        let state = ListState::settled(Vec::new(), Some(window()));
        assert_eq!(state.listing, Listing::Empty);
        assert_eq!(state.pagination, None);
    }

    #[test]
    fn test_populated_page_keeps_strip() {
        let state = ListState::settled(vec![entry()], Some(window()));
        assert_eq!(state.listing, Listing::Entries(vec![entry()]));
        assert_eq!(state.pagination, Some(window()));
    }

    #[test]
    fn test_stale_ticket_rejected() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
