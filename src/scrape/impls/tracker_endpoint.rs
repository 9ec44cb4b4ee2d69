use std::fmt;
use std::str::FromStr;
use url::Url;
use crate::scrape::enums::scrape_error::ScrapeError;
use crate::scrape::structs::tracker_endpoint::TrackerEndpoint;

impl TrackerEndpoint {
    /// Accepts `udp://host:port[/path]`; path, query and fragment are ignored.
    pub fn parse(url: &str) -> Result<TrackerEndpoint, ScrapeError> {
        let parsed = Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(format!("{url}: {e}")))?;

        if parsed.scheme() != "udp" {
            return Err(ScrapeError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let host = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ScrapeError::InvalidUrl(format!("{url}: missing host"))),
        };
        let port = match parsed.port() {
            Some(port) => port,
            None => return Err(ScrapeError::InvalidUrl(format!("{url}: missing port"))),
        };

        Ok(TrackerEndpoint { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The `host:port` form handed to the dialer.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromStr for TrackerEndpoint {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrackerEndpoint::parse(s)
    }
}

impl fmt::Display for TrackerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
