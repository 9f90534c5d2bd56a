//! Location handling for the users screen.
//!
//! The only routed state is the 1-based `page` query parameter on `/users`.
//! [`Navigator`] abstracts where the location lives: [`MemoryHistory`] on
//! native targets and in tests, the browser history on wasm32.

use std::borrow::Cow;

use roster_states::State;

pub const USERS_PATH: &str = "/users";

/// The users screen location. `page` is 1-based and never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsersRoute {
    pub page: u32,
}

impl Default for UsersRoute {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl UsersRoute {
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Reads `page` from a query string, with or without the leading `?`.
    ///
    /// Absent, unparsable, zero or negative values all give page 1.
    ///
    /// The whole value must be an integer. A JavaScript `parseInt` would read
    /// `3abc` as 3 and `2.5` as 2; here both give page 1.
    pub fn from_query(query: &str) -> Self {
        let page = query_param(query, "page")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page_index(&self) -> u32 {
        self.page - 1
    }

    pub fn to_url(&self) -> String {
        format!("{USERS_PATH}?page={}", self.page)
    }
}

/// First value of `name` in `query`, percent-decoded.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<Cow<'a, str>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(key).ok()?;
            (key == name).then(|| urlencoding::decode(value).ok())?
        })
}

/// Where the current location is read from and written to.
pub trait Navigator {
    /// Query string of the current location, without the leading `?`.
    fn current_query(&self) -> String;

    /// Navigates to `url` (path plus query), adding a history entry.
    fn push(&mut self, url: &str);

    /// Whether [`Navigator::back`] has an entry to go to.
    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    /// Steps back one entry. Returns `false` when there is none.
    fn back(&mut self) -> bool;

    fn forward(&mut self) -> bool;
}

/// In-memory history with back/forward support.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(USERS_PATH)
    }
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for MemoryHistory {
    fn current_query(&self) -> String {
        self.current()
            .split_once('?')
            .map(|(_, query)| query.to_owned())
            .unwrap_or_default()
    }

    fn push(&mut self, url: &str) {
        // Pushing drops any forward entries.
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.to_owned());
        self.cursor += 1;
        log::debug!("navigated to {url}");
    }

    fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl State for MemoryHistory {}
