pub mod packet_error;
pub mod request;
pub mod response;
