use serde::{Deserialize, Serialize};
use crate::config::structs::scrape_config::ScrapeConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub scrape: ScrapeConfig,
}
