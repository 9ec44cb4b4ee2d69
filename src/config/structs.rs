//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Scrape client settings (tracker, retries, timeouts).
pub mod scrape_config;
