//! Reliable request/response exchange over a connected datagram transport.
//!
//! UDP gives no delivery guarantee, so every tracker round trip goes through
//! [`exchange::exchange`]: send the datagram, wait for a reply under a deadline,
//! and resend when (and only when) the reply did not arrive in time.
//!
//! The transport itself is abstracted behind [`traits::datagram_transport::DatagramTransport`]
//! and opened through a [`traits::dialer::Dialer`], so the session layer can be
//! driven by a real `tokio::net::UdpSocket` or by an in-memory fake.

/// Transport and dialer traits.
pub mod traits;

/// Data structures (the UDP dialer).
pub mod structs;

/// Implementation blocks for the tokio-backed transport and dialer.
pub mod impls;

/// The retrying exchange primitive.
#[allow(clippy::module_inception)]
pub mod exchange;

#[cfg(test)]
pub(crate) mod test_transport;
