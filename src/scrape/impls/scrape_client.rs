use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::sync::Mutex;
use crate::config::structs::scrape_config::ScrapeConfig;
use crate::exchange::exchange::exchange;
use crate::exchange::structs::udp_dialer::UdpDialer;
use crate::exchange::traits::dialer::Dialer;
use crate::scrape::enums::scrape_error::ScrapeError;
use crate::scrape::structs::scrape_client::ScrapeClient;
use crate::scrape::structs::scrape_result::ScrapeResult;
use crate::scrape::structs::tracker_endpoint::TrackerEndpoint;
use crate::session::structs::session_manager::SessionManager;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::response_header::ResponseHeader;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{scrape_response_size, ACTION_ERROR, ACTION_SCRAPE, MAX_SCRAPE_TORRENTS};

impl ScrapeClient {
    /// Creates a client for `url`, which must use the `udp` scheme.
    ///
    /// Nothing is sent until the first [`scrape`](ScrapeClient::scrape).
    pub fn new(url: &str) -> Result<ScrapeClient, ScrapeError> {
        Self::with_dialer(url, Arc::new(UdpDialer::default()))
    }

    pub fn with_dialer(url: &str, dialer: Arc<dyn Dialer>) -> Result<ScrapeClient, ScrapeError> {
        let endpoint = TrackerEndpoint::parse(url)?;
        let session = SessionManager::new(endpoint.address(), dialer);
        Ok(ScrapeClient {
            endpoint,
            session,
            in_flight: Mutex::new(()),
        })
    }

    pub fn from_config(config: &ScrapeConfig) -> Result<ScrapeClient, ScrapeError> {
        let dialer = Arc::new(UdpDialer::new(config.dial_timeout_duration()));
        let client = Self::with_dialer(&config.tracker, dialer)?
            .with_timeout(config.timeout_duration())
            .with_session_lifetime(config.session_lifetime_duration());
        client.set_retry_limit(config.retry_limit);
        Ok(client)
    }

    /// Deadline for every single send and receive, handshake included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session = self.session.with_timeout(timeout);
        self
    }

    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session = self.session.with_lifetime(lifetime);
        self
    }

    /// Sets how many times an unanswered datagram is resent before giving up.
    pub fn set_retry_limit(&self, retries: u32) {
        self.session.set_retry_limit(retries);
    }

    pub fn retry_limit(&self) -> u32 {
        self.session.retry_limit()
    }

    pub fn timeout(&self) -> Duration {
        self.session.timeout()
    }

    pub fn endpoint(&self) -> &TrackerEndpoint {
        &self.endpoint
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Fetches seeders, completed and leechers for every info hash.
    ///
    /// The result has one entry per input, in input order. Input is validated
    /// before any network traffic: more than 74 entries or an entry that is
    /// not 40 hexadecimal characters fails the whole call.
    #[tracing::instrument(level = "debug", skip(self, infohashes), fields(tracker = %self.endpoint, count = infohashes.len()))]
    pub async fn scrape<S: AsRef<str>>(&self, infohashes: &[S]) -> Result<Vec<ScrapeResult>, ScrapeError> {
        if infohashes.len() > MAX_SCRAPE_TORRENTS {
            return Err(ScrapeError::TooManyInfohash { requested: infohashes.len() });
        }

        let info_hashes = infohashes
            .iter()
            .map(|infohash| {
                let infohash = infohash.as_ref();
                InfoHash::from_str(infohash).map_err(|_| ScrapeError::MalformedInfohash(infohash.to_string()))
            })
            .collect::<Result<Vec<InfoHash>, ScrapeError>>()?;

        let _in_flight = self.in_flight.lock().await;
        let active = self.session.ensure().await?;

        let transaction_id = TransactionId::random_except(active.handshake_transaction_id);
        let request = Request::from(ScrapeRequest {
            connection_id: active.connection_id,
            transaction_id,
            info_hashes: info_hashes.clone(),
        }).write_to_vec()?;

        debug!("[SCRAPE] Scraping {} info hashes from {}", info_hashes.len(), self.endpoint);
        // Cleared once the matching reply is in.
        self.session.mark_unsettled();
        let bytes = match exchange(
            active.transport.as_ref(),
            &request,
            scrape_response_size(info_hashes.len()),
            self.session.timeout(),
            self.session.retry_limit(),
        ).await {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!("[SCRAPE] Exchange with {} failed, dropping the session: {error}", self.endpoint);
                return Err(error);
            }
        };

        let header = ResponseHeader::from_bytes(&bytes)?;
        if header.transaction_id != transaction_id {
            warn!("[SCRAPE] Tracker {} echoed a foreign transaction id", self.endpoint);
            return Err(ScrapeError::InvalidTransactionID { sent: transaction_id, received: header.transaction_id });
        }
        self.session.mark_settled();

        if header.action != ACTION_SCRAPE && header.action != ACTION_ERROR {
            return Err(ScrapeError::InvalidAction { action: header.action });
        }

        match Response::from_bytes(&bytes, info_hashes.len())? {
            Response::Scrape(response) => {
                let results: Vec<ScrapeResult> = infohashes
                    .iter()
                    .zip(info_hashes)
                    .zip(response.torrent_stats.iter())
                    .map(|((infohash, info_hash), stats)| ScrapeResult::new(infohash.as_ref(), info_hash, stats))
                    .collect();
                info!("[SCRAPE] Received statistics for {} info hashes from {}", results.len(), self.endpoint);
                Ok(results)
            }
            Response::Error(response) => {
                warn!("[SCRAPE] Tracker {} reported an error: {}", self.endpoint, response.message);
                Err(ScrapeError::RemoteUnavailable(response.message.into_owned()))
            }
            other => Err(ScrapeError::InvalidAction { action: other.action() }),
        }
    }
}

impl fmt::Debug for ScrapeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrapeClient")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout())
            .field("retry_limit", &self.retry_limit())
            .finish()
    }
}
