use std::time::Duration;
use crate::config::structs::scrape_config::ScrapeConfig;
use crate::exchange::exchange::{DEFAULT_RETRY_LIMIT, DEFAULT_TIMEOUT};
use crate::session::session::DEFAULT_SESSION_LIFETIME;

impl ScrapeConfig {
    pub(crate) fn default_retry_limit() -> u32 {
        DEFAULT_RETRY_LIMIT
    }

    pub(crate) fn default_timeout() -> u64 {
        DEFAULT_TIMEOUT.as_secs()
    }

    pub(crate) fn default_session_lifetime() -> u64 {
        DEFAULT_SESSION_LIFETIME.as_secs()
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn session_lifetime_duration(&self) -> Duration {
        Duration::from_secs(self.session_lifetime)
    }

    pub fn dial_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.dial_timeout)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            tracker: String::from("udp://tracker.opentrackr.org:1337/announce"),
            retry_limit: Self::default_retry_limit(),
            timeout: Self::default_timeout(),
            session_lifetime: Self::default_session_lifetime(),
            dial_timeout: Self::default_timeout(),
        }
    }
}
