//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the scrape client
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: One of `off`, `error`, `warn`, `info`, `debug`, `trace`
//! - **scrape**: Tracker URL, retry limit and the timing knobs of the client
//!
//! # Example
//!
//! ```rust,ignore
//! use torrust_scrape::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_file("config.toml")?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! Configuration::save_file("config.toml", toml::to_string(&default_config)?)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
