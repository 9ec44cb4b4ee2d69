use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use tokio::sync::Mutex;
use crate::exchange::exchange::{exchange, DEFAULT_RETRY_LIMIT, DEFAULT_TIMEOUT};
use crate::exchange::traits::dialer::Dialer;
use crate::scrape::enums::scrape_error::ScrapeError;
use crate::session::enums::session_state::SessionState;
use crate::session::session::DEFAULT_SESSION_LIFETIME;
use crate::session::structs::active_session::ActiveSession;
use crate::session::structs::session::Session;
use crate::session::structs::session_manager::{SessionManager, SessionSlot};
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::response_header::ResponseHeader;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{connect_packet_size, ACTION_CONNECT};

impl SessionManager {
    pub fn new(address: String, dialer: Arc<dyn Dialer>) -> SessionManager {
        SessionManager {
            address,
            dialer,
            timeout: DEFAULT_TIMEOUT,
            lifetime: DEFAULT_SESSION_LIFETIME,
            retry_limit: AtomicU32::new(DEFAULT_RETRY_LIMIT),
            unsettled: AtomicBool::new(false),
            slot: Mutex::new(SessionSlot::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn retry_limit(&self) -> u32 {
        self.retry_limit.load(Ordering::Relaxed)
    }

    pub fn set_retry_limit(&self, retries: u32) {
        self.retry_limit.store(retries, Ordering::Relaxed);
    }

    pub async fn state(&self) -> SessionState {
        let slot = self.slot.lock().await;
        self.state_of(&slot)
    }

    /// Marks the cached transport as carrying a request whose reply is still due.
    ///
    /// Until [`mark_settled`](SessionManager::mark_settled) is called, the next
    /// `ensure` discards the transport and handshakes on a new one.
    pub fn mark_unsettled(&self) {
        self.unsettled.store(true, Ordering::SeqCst);
    }

    pub fn mark_settled(&self) {
        self.unsettled.store(false, Ordering::SeqCst);
    }

    /// Drops the cached session and transport; the next `ensure` handshakes again.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.session.is_some() {
            debug!("[SESSION] Invalidating session with {}", self.address);
        }
        *slot = SessionSlot::default();
        self.mark_settled();
    }

    fn state_of(&self, slot: &SessionSlot) -> SessionState {
        if self.unsettled.load(Ordering::SeqCst) {
            return SessionState::NoSession;
        }
        match (&slot.transport, &slot.session) {
            (Some(_), Some(session)) if session.is_fresh(self.lifetime) => SessionState::Fresh,
            (Some(_), Some(_)) => SessionState::Stale,
            _ => SessionState::NoSession,
        }
    }

    /// Returns a transport and a connection ID that is valid right now.
    ///
    /// Staleness check and renewal run under one lock, so concurrent callers
    /// never race two handshakes. A fresh session is returned without any I/O.
    #[tracing::instrument(level = "debug", skip(self), fields(tracker = %self.address))]
    pub async fn ensure(&self) -> Result<ActiveSession, ScrapeError> {
        let mut slot = self.slot.lock().await;

        let state = self.state_of(&slot);
        if state == SessionState::Fresh {
            if let (Some(transport), Some(session)) = (&slot.transport, &slot.session) {
                return Ok(ActiveSession {
                    transport: transport.clone(),
                    connection_id: session.connection_id,
                    handshake_transaction_id: session.transaction_id,
                });
            }
        }

        if self.unsettled.load(Ordering::SeqCst) {
            debug!("[SESSION] Dropping transport to {} with an unanswered request", self.address);
        }

        // Whatever happens next, a failure must leave nothing half-installed.
        *slot = SessionSlot::default();
        self.mark_settled();

        debug!("[SESSION] {:?} session with {}, running connect handshake", state, self.address);
        let transport = self.dialer.dial(&self.address).await?;
        let transaction_id = TransactionId::random();

        let request = Request::from(ConnectRequest { transaction_id }).write_to_vec()?;
        let bytes = exchange(
            transport.as_ref(),
            &request,
            connect_packet_size(),
            self.timeout,
            self.retry_limit(),
        ).await?;

        let header = ResponseHeader::from_bytes(&bytes)?;
        if header.action != ACTION_CONNECT {
            warn!("[SESSION] Tracker {} answered the handshake with action {}", self.address, header.action);
            return Err(ScrapeError::InvalidAction { action: header.action });
        }
        if header.transaction_id != transaction_id {
            warn!("[SESSION] Tracker {} echoed a foreign transaction id", self.address);
            return Err(ScrapeError::InvalidTransactionID { sent: transaction_id, received: header.transaction_id });
        }

        let response = match Response::from_bytes(&bytes, 0)? {
            Response::Connect(response) => response,
            other => return Err(ScrapeError::InvalidAction { action: other.action() }),
        };

        let session = Session::new(response.connection_id, transaction_id);
        info!("[SESSION] Connected to {} (connection id {:#018x})", self.address, session.connection_id.0);

        slot.transport = Some(transport.clone());
        slot.session = Some(session);

        Ok(ActiveSession {
            transport,
            connection_id: session.connection_id,
            handshake_transaction_id: transaction_id,
        })
    }
}
