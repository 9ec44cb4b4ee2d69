pub mod configuration;
pub mod configuration_error;
pub mod scrape_config;
