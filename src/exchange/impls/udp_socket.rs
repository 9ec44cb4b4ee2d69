use std::io;
use async_trait::async_trait;
use tokio::net::UdpSocket;
use crate::exchange::traits::datagram_transport::DatagramTransport;

#[async_trait]
impl DatagramTransport for UdpSocket {
    async fn send(&self, buf: &[u8]) -> io::Result<usize> {
        UdpSocket::send(self, buf).await
    }

    async fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        UdpSocket::recv(self, buf).await
    }
}
