pub mod info_hash;
pub mod request;
pub mod response;
pub mod response_header;
pub mod transaction_id;
