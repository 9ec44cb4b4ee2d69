//! Connection session management.
//!
//! A tracker only accepts scrape requests carrying a connection ID it handed
//! out during the last minute. The [`structs::session_manager::SessionManager`]
//! owns the transport and the cached [`structs::session::Session`] and runs
//! the connect handshake whenever the session is missing or stale.
//!
//! # States
//!
//! - **NoSession**: nothing cached, or the last handshake failed
//! - **Fresh**: a connection ID younger than the session lifetime
//! - **Stale**: a connection ID that reached the session lifetime
//!
//! Only a successful handshake leads to **Fresh**. A failed handshake drops
//! both the transport and the session, so the next call starts from scratch.

pub mod enums;
pub mod impls;
pub mod structs;

/// Session constants.
#[allow(clippy::module_inception)]
pub mod session;

#[cfg(test)]
mod tests;
