use std::sync::Arc;
use crate::exchange::traits::datagram_transport::DatagramTransport;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;

/// What [`SessionManager::ensure`](crate::session::structs::session_manager::SessionManager::ensure)
/// lends to a caller for the duration of one request.
#[derive(Clone)]
pub struct ActiveSession {
    pub transport: Arc<dyn DatagramTransport>,
    pub connection_id: ConnectionId,
    /// Transaction ID of the handshake that produced `connection_id`.
    pub handshake_transaction_id: TransactionId,
}
