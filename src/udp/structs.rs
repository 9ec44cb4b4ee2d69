//! Data structures for UDP protocol messages.

pub mod connect_request;
pub mod connect_response;
pub mod connection_id;
pub mod error_response;
pub mod info_hash;
pub mod number_of_downloads;
pub mod number_of_peers;
pub mod response_header;
pub mod scrape_request;
pub mod scrape_response;
pub mod torrent_scrape_statistics;
pub mod transaction_id;
