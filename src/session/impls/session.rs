use std::time::{Duration, Instant};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;
use crate::session::structs::session::Session;

impl Session {
    pub fn new(connection_id: ConnectionId, transaction_id: TransactionId) -> Session {
        Session {
            connection_id,
            transaction_id,
            established_at: Instant::now(),
        }
    }

    #[inline]
    pub fn age(&self) -> Duration {
        self.established_at.elapsed()
    }

    /// Usable while strictly younger than `lifetime`.
    #[inline]
    pub fn is_fresh(&self, lifetime: Duration) -> bool {
        self.age() < lifetime
    }
}
