pub mod scrape_client;
pub mod scrape_result;
pub mod tracker_endpoint;
