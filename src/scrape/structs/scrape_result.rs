use crate::udp::structs::info_hash::InfoHash;

/// Swarm statistics for one requested info hash.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeResult {
    /// The info hash exactly as the caller passed it in.
    pub infohash: String,
    pub info_hash: InfoHash,
    pub seeders: u32,
    pub leechers: u32,
    pub completed: u32,
}
