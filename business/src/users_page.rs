//! Orchestration of the users screen.
//!
//! Each frame the view calls [`UsersPage::sync`] with the current location
//! query. That re-derives the page index, makes sure the page is fetched (or
//! cached) and applies finished fetches. [`UsersPage::view`] then projects
//! everything into what the table should draw.

use roster_states::{QueryClient, Spawner, State};

use crate::fetch_users::{UserPage, fetch_users};
use crate::pagination::PaginationController;
use crate::table::TableState;
use crate::user::UserRecord;
use crate::BusinessConfig;

#[derive(Debug, PartialEq, Eq)]
pub enum UsersView<'a> {
    /// Nothing to show yet.
    Loading,
    Error(&'a str),
    Ready(ReadyView<'a>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadyView<'a> {
    /// Filtered and sorted rows of the page on screen.
    pub rows: Vec<&'a UserRecord>,
    pub page_number: u32,
    pub total_pages: u64,
    pub can_previous: bool,
    pub can_next: bool,
    /// A fetch for the requested page is in flight.
    pub is_fetching: bool,
    /// `rows` belong to the page shown before the requested one.
    pub is_previous_data: bool,
}

#[derive(Debug)]
pub struct UsersPage {
    config: BusinessConfig,
    table: TableState,
    pagination: PaginationController,
    query: QueryClient<u32, UserPage>,
}

impl UsersPage {
    pub fn new(config: BusinessConfig, spawner: Spawner) -> Self {
        let pagination = PaginationController::new(config.page_size);
        Self {
            config,
            table: TableState::new(),
            pagination,
            query: QueryClient::new(spawner),
        }
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableState {
        &mut self.table
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn in_flight(&self) -> usize {
        self.query.in_flight()
    }

    /// Brings the screen up to date with `location_query`.
    pub fn sync(&mut self, location_query: &str) {
        self.pagination.sync_from_query(location_query);

        // The fetch closure only runs when the page was never requested.
        let started = self.query.select_with(self.pagination.page_index(), |index| {
            let config = self.config.clone();
            async move { fetch_users(&config, index + 1).await }
        });
        if started {
            log::info!("fetching users page {}", self.pagination.page_number());
        }

        self.query.sync();
        if let Some(page) = self.query.view().data {
            self.pagination.set_total_count(page.total_count);
        }
    }

    /// Fetches the requested page again, replacing a failed or stale result.
    pub fn retry(&mut self) {
        self.query.refetch(self.pagination.page_index(), |index| {
            let config = self.config.clone();
            async move { fetch_users(&config, index + 1).await }
        });
    }

    /// URL to push for the next page, if there is one.
    pub fn next(&mut self) -> Option<String> {
        self.pagination.next()
    }

    pub fn previous(&mut self) -> Option<String> {
        self.pagination.previous()
    }

    pub fn view(&self) -> UsersView<'_> {
        let query = self.query.view();

        if let Some(message) = query.error {
            return UsersView::Error(message);
        }
        let Some(page) = query.data else {
            return UsersView::Loading;
        };

        UsersView::Ready(ReadyView {
            rows: self.table.visible_rows(&page.records),
            page_number: self.pagination.page_number(),
            total_pages: self.pagination.total_pages(),
            can_previous: self.pagination.can_previous(),
            can_next: self.pagination.can_next(),
            is_fetching: query.is_fetching,
            is_previous_data: query.is_previous_data,
        })
    }
}

impl State for UsersPage {}
