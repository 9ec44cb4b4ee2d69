use serde::{Deserialize, Serialize};

/// The `[scrape]` table. Durations are whole seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub tracker: String,
    #[serde(default = "ScrapeConfig::default_retry_limit")]
    pub retry_limit: u32,
    #[serde(default = "ScrapeConfig::default_timeout")]
    pub timeout: u64,
    #[serde(default = "ScrapeConfig::default_session_lifetime")]
    pub session_lifetime: u64,
    #[serde(default = "ScrapeConfig::default_timeout")]
    pub dial_timeout: u64,
}
