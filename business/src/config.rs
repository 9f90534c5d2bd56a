use std::time::Duration;

use roster_states::State;
use serde::Deserialize;
use ustr::Ustr;

/// Records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Total used when the data source does not report one.
pub const MOCK_TOTAL_COUNT: u64 = 50;

pub const DEFAULT_USERS_API_URL: &str = "https://randomuser.me/api/";

/// How the total record count of a fetched page is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalCountPolicy {
    /// Always this value, whatever the source says.
    Fixed(u64),
    /// `info.total` from the response when present, else `fallback`.
    Reported { fallback: u64 },
}

impl Default for TotalCountPolicy {
    fn default() -> Self {
        Self::Fixed(MOCK_TOTAL_COUNT)
    }
}

impl TotalCountPolicy {
    pub fn resolve(self, reported: Option<u64>) -> u64 {
        match self {
            Self::Fixed(total) => total,
            Self::Reported { fallback } => reported.unwrap_or(fallback),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Endpoint of the user listing source.
    pub users_api_url: String,
    /// Base URL of `roster-services`; empty means same origin.
    pub services_base_url: String,
    pub page_size: u32,
    pub total_count: TotalCountPolicy,
    /// Applied per request on native targets.
    pub request_timeout: Duration,
}

impl BusinessConfig {
    pub fn new(users_api_url: impl Into<String>, services_base_url: impl Into<String>) -> Self {
        Self {
            users_api_url: users_api_url.into(),
            services_base_url: services_base_url.into(),
            ..Self::default()
        }
    }

    pub fn services_api_url(&self) -> Ustr {
        let base = self.services_base_url.trim_end_matches('/');
        if base.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{base}/api"))
        }
    }

    pub fn execute_command_url(&self) -> String {
        format!("{}/execute-command", self.services_api_url())
    }

    /// Applies `ROSTER_*` overrides from `vars` on top of the defaults.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        let overrides: ConfigOverrides = serde_env::from_iter(
            vars.into_iter()
                .filter_map(|(key, value)| key.strip_prefix("ROSTER_").map(|k| (k.to_owned(), value))),
        )?;
        overrides.apply(Self::default())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            users_api_url: DEFAULT_USERS_API_URL.to_owned(),
            services_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://127.0.0.1:8080".to_owned()
            },
            page_size: DEFAULT_PAGE_SIZE,
            total_count: TotalCountPolicy::default(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl State for BusinessConfig {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TotalCountMode {
    Fixed,
    Reported,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    users_api_url: Option<String>,
    services_base_url: Option<String>,
    total_count_mode: Option<TotalCountMode>,
    request_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    fn apply(self, mut config: BusinessConfig) -> anyhow::Result<BusinessConfig> {
        if let Some(url) = self.users_api_url {
            config.users_api_url = url;
        }
        if let Some(url) = self.services_base_url {
            config.services_base_url = url;
        }
        match self.total_count_mode {
            Some(TotalCountMode::Reported) => {
                config.total_count = TotalCountPolicy::Reported {
                    fallback: MOCK_TOTAL_COUNT,
                };
            }
            Some(TotalCountMode::Fixed) => {
                config.total_count = TotalCountPolicy::Fixed(MOCK_TOTAL_COUNT);
            }
            None => {}
        }
        match self.request_timeout_secs {
            Some(0) => anyhow::bail!("ROSTER_REQUEST_TIMEOUT_SECS must be at least 1"),
            Some(secs) => config.request_timeout = Duration::from_secs(secs),
            None => {}
        }
        Ok(config)
    }
}
