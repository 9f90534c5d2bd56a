//! Fetch adapter for the user listing source.
//!
//! One call per page: `GET {users_api_url}?results={page_size}&page={n}`
//! with `n` 1-based. The response is normalised into a [`UserPage`].

use serde::Deserialize;

use crate::BusinessConfig;
use crate::http::{Client, HttpError};
use crate::user::UserRecord;

/// The live data set of the screen: one fetched batch of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub records: Vec<UserRecord>,
    /// 0-based.
    pub page_index: u32,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Error fetching users. (status {0})")]
    Status(u16),
    #[error("Error fetching users. {0}")]
    Transport(String),
    #[error("Error fetching users. The request timed out.")]
    Timeout,
    #[error("Failed to parse users response: {0}")]
    Decode(String),
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout => Self::Timeout,
            HttpError::Transport(message) => Self::Transport(message),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UsersResponse {
    results: Vec<UserRecord>,
    #[serde(default)]
    info: Option<ResponseInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseInfo {
    #[serde(default)]
    total: Option<u64>,
}

pub fn users_url(config: &BusinessConfig, page_number: u32) -> String {
    let separator = if config.users_api_url.contains('?') {
        '&'
    } else {
        '?'
    };
    format!(
        "{}{separator}results={}&page={page_number}",
        config.users_api_url, config.page_size
    )
}

/// Fetches 1-based page `page_number`.
pub async fn fetch_users(config: &BusinessConfig, page_number: u32) -> Result<UserPage, FetchError> {
    let url = users_url(config, page_number);

    let response = Client::get(url)
        .header("accept", "application/json")
        .timeout(config.request_timeout)
        .send()
        .await?;

    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }

    let payload: UsersResponse = response
        .json()
        .map_err(|err| FetchError::Decode(err.to_string()))?;

    let reported = payload.info.and_then(|info| info.total);
    Ok(UserPage {
        records: payload.results,
        page_index: page_number.saturating_sub(1),
        total_count: config.total_count.resolve(reported),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_page_size_and_one_based_page() {
        let config = BusinessConfig::new("https://randomuser.me/api/", "");
        assert_eq!(
            users_url(&config, 3),
            "https://randomuser.me/api/?results=10&page=3"
        );
    }

    #[test]
    fn url_appends_to_existing_query() {
        let config = BusinessConfig::new("https://randomuser.me/api/?seed=abc", "");
        assert_eq!(
            users_url(&config, 1),
            "https://randomuser.me/api/?seed=abc&results=10&page=1"
        );
    }

    #[test]
    fn error_messages_are_human_readable() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Error fetching users. (status 503)"
        );
        assert_eq!(
            FetchError::from(HttpError::Timeout),
            FetchError::Timeout
        );
    }
}
