use std::io;
use std::sync::Arc;
use async_trait::async_trait;
use crate::exchange::traits::datagram_transport::DatagramTransport;

#[async_trait]
pub trait Dialer: Send + Sync {
    /// Opens a transport connected to `address` (`host:port`).
    async fn dial(&self, address: &str) -> io::Result<Arc<dyn DatagramTransport>>;
}
