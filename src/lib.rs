//! # Torrust-Scrape UDP Tracker Scrape Client
//!
//! A small asynchronous client that asks BitTorrent UDP trackers for swarm
//! statistics (seeders, completed downloads, leechers) of up to 74 torrents at
//! once.
//!
//! ## Overview
//!
//! The client implements the connect and scrape halves of the UDP tracker
//! protocol. A connection ID obtained from the connect handshake is cached for
//! sixty seconds, so repeated scrapes against the same tracker cost a single
//! round trip each.
//!
//! ## BEP Compliance
//!
//! - BEP 15: UDP Tracker Protocol (connect and scrape)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrust_scrape::scrape::structs::scrape_client::ScrapeClient;
//!
//! let client = ScrapeClient::new("udp://tracker.opentrackr.org:1337/announce")?;
//! let results = client.scrape(&["176e2a9696092482d4acdef445b53ffcebb56960"]).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Hex helpers, logging setup and the plain message error
//! - [`config`] - Configuration management and TOML parsing
//! - [`exchange`] - Datagram transport abstraction and the retrying exchange
//! - [`scrape`] - The public scrape client
//! - [`session`] - Connection ID caching and the connect handshake
//! - [`structs`] - CLI argument parsing
//! - [`udp`] - UDP tracker packet codec (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains hex conversion helpers, log level parsing and logging setup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// Request/response exchange over a datagram transport.
///
/// Sends a datagram, waits for the reply under a deadline and resends on
/// timeouts, up to the configured retry limit.
pub mod exchange;

/// The scrape client.
pub mod scrape;

/// Session management for tracker connection IDs.
pub mod session;

/// CLI argument parsing.
///
/// Defines command-line interface options for the `torrust-scrape` binary.
pub mod structs;

/// UDP tracker protocol codec (BEP 15).
///
/// Encodes connect and scrape requests and decodes connect, scrape and error
/// responses. Performs no I/O.
pub mod udp;
