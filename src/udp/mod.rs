//! UDP tracker packet codec (BEP 15).
//!
//! This module translates between the structured connect/scrape messages and
//! their wire representation. It performs no I/O and holds no state.
//!
//! # Message Types
//!
//! - **Connect** (action=0): Obtain a connection ID from the tracker
//! - **Announce** (action=1): Not implemented by this client
//! - **Scrape** (action=2): Query seeders, completed and leechers per info hash
//! - **Error** (action=3): Tracker-side failure with a text message
//!
//! # Wire Layout
//!
//! Everything is big-endian. A connect request is 16 bytes, a scrape request is
//! `16 + 20 * N` bytes and a scrape response is `8 + 12 * N` bytes, where `N` is
//! the number of info hashes (at most 74).
//!
//! The codec is symmetric: requests and responses can both be written and
//! parsed, which is what the fake trackers in the test suite are built from.

/// Enumerations for UDP requests, responses and parse errors.
pub mod enums;

/// Implementation blocks for UDP packet encoding and decoding.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Protocol constants and packet sizing functions.
#[allow(clippy::module_inception)]
pub mod udp;
