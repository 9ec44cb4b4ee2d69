pub mod datagram_transport;
pub mod dialer;
