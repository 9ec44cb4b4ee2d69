use std::sync::atomic::{AtomicBool, AtomicU32};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use crate::exchange::traits::datagram_transport::DatagramTransport;
use crate::exchange::traits::dialer::Dialer;
use crate::session::structs::session::Session;

pub struct SessionManager {
    pub(crate) address: String,
    pub(crate) dialer: Arc<dyn Dialer>,
    pub(crate) timeout: Duration,
    pub(crate) lifetime: Duration,
    pub(crate) retry_limit: AtomicU32,
    /// Set while a request on the cached transport awaits its reply.
    pub(crate) unsettled: AtomicBool,
    pub(crate) slot: Mutex<SessionSlot>,
}

#[derive(Default)]
pub(crate) struct SessionSlot {
    pub(crate) transport: Option<Arc<dyn DatagramTransport>>,
    pub(crate) session: Option<Session>,
}
