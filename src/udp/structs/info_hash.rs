//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// Callers hand info hashes to the scrape client as 40-character hexadecimal
/// strings; on the wire they travel as the raw 20 bytes.
///
/// # Example
///
/// ```rust
/// use torrust_scrape::udp::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "176e2a9696092482d4acdef445b53ffcebb56960".parse().unwrap();
/// assert_eq!(hash.0[0], 0x17);
/// assert_eq!(hash.to_string(), "176e2a9696092482d4acdef445b53ffcebb56960");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
