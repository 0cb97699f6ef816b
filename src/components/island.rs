//! Deferred Islands
//!
//! Server-rendered containers keep their markup until the first successful
//! load. Only then are they emptied and handed to Leptos.

use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::dom;

/// Who owns a container's contents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handover {
    #[default]
    ServerRendered,
    Mounted,
}

impl Handover {
    /// `true` exactly once, on the transition to `Mounted`
    pub fn claim(&mut self) -> bool {
        let first = *self == Handover::ServerRendered;
        *self = Handover::Mounted;
        first
    }
}

#[derive(Clone, Copy)]
pub struct Island {
    id: &'static str,
    handover: StoredValue<Handover>,
}

impl Island {
    /// `None` when the page has no element with this id
    pub fn find(id: &'static str) -> Option<Self> {
        dom::by_id(id)?;
        Some(Self { id, handover: StoredValue::new(Handover::default()) })
    }

    /// Replace the server markup with `view` on the first call; later calls
    /// are no-ops since the mounted view tracks its own signals.
    pub fn mount<F, N>(self, view: F)
    where
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        let mut first = false;
        self.handover.update_value(|h| first = h.claim());
        if !first {
            return;
        }
        match dom::take_anchor(self.id) {
            Some(anchor) => mount_to(anchor, view).forget(),
            None => log::warn!("#{} vanished before mounting", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_happens_once() {
        let mut handover = Handover::default();
        assert_eq!(handover, Handover::ServerRendered);
        assert!(handover.claim());
        assert_eq!(handover, Handover::Mounted);
        assert!(!handover.claim());
        assert!(!handover.claim());
    }
}
