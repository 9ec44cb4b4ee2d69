use tokio::sync::Mutex;
use crate::scrape::structs::tracker_endpoint::TrackerEndpoint;
use crate::session::structs::session_manager::SessionManager;

/// Scrapes one UDP tracker. Cheap to share behind an `Arc`; concurrent calls
/// on the same client run one after the other.
pub struct ScrapeClient {
    pub(crate) endpoint: TrackerEndpoint,
    pub(crate) session: SessionManager,
    pub(crate) in_flight: Mutex<()>,
}
