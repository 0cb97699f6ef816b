//! Pagination Window
//!
//! Computes which page controls the pagination strip shows.

use std::ops::RangeInclusive;

use crate::models::Pagination;

/// Visible slice of page numbers around the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub num_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub left_start: u32,
    pub right_end: u32,
}

impl PageWindow {
    /// Centre a window of `window` page numbers on the current page.
    /// Both edges extend `ceil(window / 2)` pages and are clamped to the
    /// valid page range.
    pub fn compute(pagination: &Pagination, window: u32) -> Self {
        let last = pagination.num_pages.max(1) - 1;
        let page = pagination.page.min(last);
        let half = window.div_ceil(2);
        Self {
            page,
            num_pages: last + 1,
            has_next: pagination.has_next,
            has_previous: pagination.has_previous,
            left_start: page.saturating_sub(half),
            right_end: page.saturating_add(half).min(last),
        }
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        self.left_start..=self.right_end
    }

    pub fn last_page(&self) -> u32 {
        self.num_pages - 1
    }

    pub fn shows_first_jump(&self) -> bool {
        self.left_start > 0
    }

    pub fn shows_last_jump(&self) -> bool {
        self.right_end < self.last_page()
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous.then(|| self.page.saturating_sub(1))
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next.then(|| (self.page + 1).min(self.last_page()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: u32, num_pages: u32, has_next: bool, has_previous: bool) -> Pagination {
        Pagination { page, num_pages, has_next, has_previous }
    }

    #[test]
    fn test_centered_window() {
        let w = PageWindow::compute(&pagination(10, 20, true, true), 10);
        assert_eq!(w.pages(), 5..=15);
        assert!(w.shows_first_jump());
        assert!(w.shows_last_jump());
        assert_eq!(w.previous_page(), Some(9));
        assert_eq!(w.next_page(), Some(11));
    }

    #[test]
    fn test_first_page_of_three() {
        let w = PageWindow::compute(&pagination(0, 3, true, false), 10);
        assert_eq!(w.pages(), 0..=2);
        assert_eq!(w.previous_page(), None);
        assert_eq!(w.next_page(), Some(1));
        assert!(!w.shows_first_jump());
        assert!(!w.shows_last_jump());
    }

    #[test]
    fn test_single_page() {
        for num_pages in [0, 1] {
            let w = PageWindow::compute(&pagination(0, num_pages, false, false), 10);
            assert_eq!(w.pages().count(), 1);
            assert_eq!(w.previous_page(), None);
            assert_eq!(w.next_page(), None);
            assert!(!w.shows_first_jump());
            assert!(!w.shows_last_jump());
        }
    }

    #[test]
    fn test_window_clamped_at_end() {
        let w = PageWindow::compute(&pagination(19, 20, false, true), 10);
        assert_eq!(w.pages(), 14..=19);
        assert!(w.shows_first_jump());
        assert!(!w.shows_last_jump());
    }

    #[test]
    fn test_odd_window_rounds_up() {
        let w = PageWindow::compute(&pagination(10, 30, true, true), 5);
        assert_eq!(w.pages(), 7..=13);
    }
}
