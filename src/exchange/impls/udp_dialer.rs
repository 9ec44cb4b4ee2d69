use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use crate::exchange::exchange::DEFAULT_TIMEOUT;
use crate::exchange::structs::udp_dialer::UdpDialer;
use crate::exchange::traits::datagram_transport::DatagramTransport;
use crate::exchange::traits::dialer::Dialer;

impl UdpDialer {
    pub fn new(timeout: Duration) -> UdpDialer {
        UdpDialer { timeout }
    }

    async fn open(address: &str) -> io::Result<UdpSocket> {
        let remote = tokio::net::lookup_host(address)
            .await?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no address found for {address}")))?;

        let local: SocketAddr = match remote {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        let socket = UdpSocket::bind(local).await?;
        socket.connect(remote).await?;
        debug!("[EXCHANGE] Dialed {address} ({remote}) from {}", socket.local_addr()?);
        Ok(socket)
    }
}

impl Default for UdpDialer {
    fn default() -> Self {
        UdpDialer::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Dialer for UdpDialer {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn dial(&self, address: &str) -> io::Result<Arc<dyn DatagramTransport>> {
        match timeout(self.timeout, Self::open(address)).await {
            Ok(socket) => {
                let transport: Arc<dyn DatagramTransport> = Arc::new(socket?);
                Ok(transport)
            }
            Err(_) => Err(io::Error::new(io::ErrorKind::TimedOut, format!("dialing {address} timed out"))),
        }
    }
}
