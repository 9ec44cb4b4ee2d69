//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the scrape client.
//!
//! # Utilities
//!
//! - Hex encoding/decoding
//! - Logging setup
//!
//! # Data Structures
//!
//! - `CustomError` - Plain message error used by configuration loading
//!
//! # Example
//!
//! ```rust
//! use torrust_scrape::common::common::hex_to_nibble;
//!
//! assert_eq!(hex_to_nibble(b'a'), 10);
//! assert_eq!(hex_to_nibble(b'z'), 0xFF);
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
