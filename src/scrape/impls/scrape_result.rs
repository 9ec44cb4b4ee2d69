use std::fmt;
use crate::scrape::structs::scrape_result::ScrapeResult;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;

impl ScrapeResult {
    pub(crate) fn new(infohash: &str, info_hash: InfoHash, stats: &TorrentScrapeStatistics) -> ScrapeResult {
        ScrapeResult {
            infohash: infohash.to_string(),
            info_hash,
            seeders: stats.seeders.0,
            leechers: stats.leechers.0,
            completed: stats.completed.0,
        }
    }
}

impl fmt::Display for ScrapeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Infohash:\t{}", self.infohash)?;
        writeln!(f, "Seeders:\t{}", self.seeders)?;
        writeln!(f, "Completed:\t{}", self.completed)?;
        writeln!(f, "Leechers:\t{}", self.leechers)
    }
}
