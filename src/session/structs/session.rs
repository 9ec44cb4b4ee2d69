use std::time::Instant;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

/// The result of one successful connect handshake. Replaced wholesale on renewal.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Session {
    pub connection_id: ConnectionId,
    pub transaction_id: TransactionId,
    pub established_at: Instant,
}
