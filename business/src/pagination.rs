//! Pagination controller mirrored into the `page` query parameter.
//!
//! The controller is always `at-page(n)` with `n` 0-based. `next` and
//! `previous` move the state and return the URL to push; the location is
//! then re-read on the following frame through [`PaginationController::sync_from_query`],
//! which converges on the same `n`.

use crate::route::UsersRoute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    page_index: u32,
    page_size: u32,
    total_count: u64,
}

impl PaginationController {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// 1-based, as written to the URL and sent to the data source.
    pub fn page_number(&self) -> u32 {
        self.page_index + 1
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size))
    }

    pub fn set_total_count(&mut self, total_count: u64) {
        self.total_count = total_count;
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        u64::from(self.page_index) + 1 < self.total_pages()
    }

    /// Moves to the next page and returns the URL to push, or `None` when
    /// already on the last known page.
    pub fn next(&mut self) -> Option<String> {
        if !self.can_next() {
            return None;
        }
        self.page_index += 1;
        Some(self.route().to_url())
    }

    pub fn previous(&mut self) -> Option<String> {
        if !self.can_previous() {
            return None;
        }
        self.page_index -= 1;
        Some(self.route().to_url())
    }

    /// Re-derives the page from a location query. Returns `true` if it changed.
    pub fn sync_from_query(&mut self, query: &str) -> bool {
        let index = UsersRoute::from_query(query).page_index();
        if index == self.page_index {
            return false;
        }
        log::debug!("page index {} -> {index}", self.page_index);
        self.page_index = index;
        true
    }

    pub fn route(&self) -> UsersRoute {
        UsersRoute::new(self.page_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{MemoryHistory, Navigator};

    fn controller(total_count: u64) -> PaginationController {
        let mut controller = PaginationController::new(10);
        controller.set_total_count(total_count);
        controller
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(controller(50).total_pages(), 5);
        assert_eq!(controller(51).total_pages(), 6);
        assert_eq!(controller(9).total_pages(), 1);
        assert_eq!(controller(0).total_pages(), 0);
    }

    #[test]
    fn first_page_disables_previous() {
        let mut pagination = controller(50);

        assert!(!pagination.can_previous());
        assert!(pagination.can_next());
        assert_eq!(pagination.previous(), None);
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn last_page_disables_next() {
        let mut pagination = controller(50);
        pagination.sync_from_query("page=5");

        assert_eq!(pagination.page_index(), 4);
        assert!(!pagination.can_next());
        assert!(pagination.can_previous());
        assert_eq!(pagination.next(), None);
    }

    #[test]
    fn nothing_loaded_disables_both() {
        let pagination = controller(0);

        assert!(!pagination.can_next());
        assert!(!pagination.can_previous());
    }

    #[test]
    fn next_from_page_three_writes_page_four() {
        let mut history = MemoryHistory::new("/users?page=3");
        let mut pagination = controller(50);
        pagination.sync_from_query(&history.current_query());

        let url = pagination.next().expect("next is enabled");
        history.push(&url);

        assert_eq!(url, "/users?page=4");
        assert_eq!(pagination.page_index(), 3);
        assert!(!pagination.sync_from_query(&history.current_query()));
    }

    #[test]
    fn previous_writes_current_page_number() {
        let mut pagination = controller(50);
        pagination.sync_from_query("page=2");

        assert_eq!(pagination.previous().as_deref(), Some("/users?page=1"));
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn page_beyond_total_is_kept_with_next_disabled() {
        let mut pagination = controller(50);
        assert!(pagination.sync_from_query("page=9"));

        assert_eq!(pagination.page_index(), 8);
        assert!(!pagination.can_next());
        assert!(pagination.can_previous());
    }

    #[test]
    fn unparsable_query_goes_to_first_page() {
        let mut pagination = controller(50);
        pagination.sync_from_query("page=4");

        assert!(pagination.sync_from_query("page=four"));
        assert_eq!(pagination.page_index(), 0);
    }
}
