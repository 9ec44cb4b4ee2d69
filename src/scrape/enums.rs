pub mod scrape_error;
