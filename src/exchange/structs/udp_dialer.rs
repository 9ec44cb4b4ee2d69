use std::time::Duration;

/// Opens `tokio::net::UdpSocket`s, resolving the tracker host first.
#[derive(Debug, Clone, Copy)]
pub struct UdpDialer {
    pub timeout: Duration,
}
