//! The BEP 15 scrape client.
//!
//! [`structs::scrape_client::ScrapeClient`] is the only entry point most callers
//! need: give it a `udp://host:port/...` tracker URL once, then call
//! [`scrape`](structs::scrape_client::ScrapeClient::scrape) with up to 74
//! info hashes per call.
//!
//! Each call takes at most two round trips: the connect handshake (skipped while
//! the session is fresh) and the scrape itself. Results come back in the order
//! the info hashes were given.
//!
//! ```no_run
//! use torrust_scrape::scrape::structs::scrape_client::ScrapeClient;
//!
//! # async fn run() -> Result<(), torrust_scrape::scrape::enums::scrape_error::ScrapeError> {
//! let client = ScrapeClient::new("udp://tracker.opentrackr.org:1337/announce")?;
//! let results = client.scrape(&["176e2a9696092482d4acdef445b53ffcebb56960"]).await?;
//! for result in results {
//!     println!("{}: {} seeders", result.infohash, result.seeders);
//! }
//! # Ok(())
//! # }
//! ```

pub mod enums;
pub mod impls;
pub mod structs;
