pub mod udp_dialer;
