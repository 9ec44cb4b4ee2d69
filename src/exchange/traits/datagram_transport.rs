use std::io;
use async_trait::async_trait;

/// A connected datagram socket: every `send` goes to, and every `recv` comes
/// from, the one remote endpoint it was opened for.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Sends one datagram, returning the number of bytes written.
    async fn send(&self, buf: &[u8]) -> io::Result<usize>;

    /// Receives one datagram into `buf`, returning its length.
    async fn recv(&self, buf: &mut [u8]) -> io::Result<usize>;
}
