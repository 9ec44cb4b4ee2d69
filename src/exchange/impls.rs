pub mod udp_dialer;
pub mod udp_socket;
