use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::packet_error::PacketError;
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::response_header::ResponseHeader;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{connect_packet_size, scrape_response_size, ACTION_CONNECT, ACTION_ERROR, ACTION_SCRAPE, RESPONSE_HEADER_SIZE, SCRAPE_RECORD_SIZE};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeResponse> for Response {
    fn from(r: ScrapeResponse) -> Self {
        Self::Scrape(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    #[inline]
    pub fn action(&self) -> u32 {
        match self {
            Response::Connect(_) => ACTION_CONNECT,
            Response::Scrape(_) => ACTION_SCRAPE,
            Response::Error(_) => ACTION_ERROR,
        }
    }

    #[inline]
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Response::Connect(r) => r.transaction_id,
            Response::Scrape(r) => r.transaction_id,
            Response::Error(r) => r.transaction_id,
        }
    }

    #[tracing::instrument(skip(self, bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_u32::<NetworkEndian>(self.action())?;
        bytes.write_u32::<NetworkEndian>(self.transaction_id().0)?;

        match self {
            Response::Connect(r) => {
                bytes.write_u64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Scrape(r) => {
                for torrent_stat in &r.torrent_stats {
                    bytes.write_u32::<NetworkEndian>(torrent_stat.seeders.0)?;
                    bytes.write_u32::<NetworkEndian>(torrent_stat.completed.0)?;
                    bytes.write_u32::<NetworkEndian>(torrent_stat.leechers.0)?;
                }
            }
            Response::Error(r) => {
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    /// Decodes a tracker response.
    ///
    /// A scrape response must hold at least `scrape_torrents` records; exactly
    /// that many are decoded, in wire order, and any trailing bytes are ignored.
    #[tracing::instrument(level = "debug")]
    #[inline]
    pub fn from_bytes(bytes: &[u8], scrape_torrents: usize) -> Result<Self, PacketError> {
        let header = ResponseHeader::from_bytes(bytes)?;
        let transaction_id = header.transaction_id;

        match header.action {
            ACTION_CONNECT => {
                if bytes.len() < connect_packet_size() {
                    return Err(PacketError::Truncated { expected: connect_packet_size(), received: bytes.len() });
                }
                let mut cursor = Cursor::new(&bytes[RESPONSE_HEADER_SIZE..]);
                let connection_id = cursor.read_u64::<NetworkEndian>()?;

                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                }
                    .into())
            }
            ACTION_SCRAPE => {
                let expected = scrape_response_size(scrape_torrents);
                if bytes.len() < expected {
                    return Err(PacketError::Truncated { expected, received: bytes.len() });
                }

                let torrent_stats = parse_scrape_stats(&bytes[RESPONSE_HEADER_SIZE..expected])?;
                Ok(ScrapeResponse {
                    transaction_id,
                    torrent_stats,
                }
                    .into())
            }
            ACTION_ERROR => {
                let message = String::from_utf8_lossy(&bytes[RESPONSE_HEADER_SIZE..]).into_owned();

                Ok(ErrorResponse {
                    transaction_id,
                    message: message.into(),
                }
                    .into())
            }
            action => Err(PacketError::UnknownAction { action, transaction_id }),
        }
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => connect_packet_size(),
            Response::Scrape(r) => scrape_response_size(r.torrent_stats.len()),
            Response::Error(r) => RESPONSE_HEADER_SIZE + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

#[inline]
fn parse_scrape_stats(bytes: &[u8]) -> Result<Vec<TorrentScrapeStatistics>, io::Error> {
    let mut stats = Vec::with_capacity(bytes.len() / SCRAPE_RECORD_SIZE);

    for chunk in bytes.chunks_exact(SCRAPE_RECORD_SIZE) {
        let mut cursor = Cursor::new(chunk);

        let seeders = cursor.read_u32::<NetworkEndian>()?;
        let completed = cursor.read_u32::<NetworkEndian>()?;
        let leechers = cursor.read_u32::<NetworkEndian>()?;

        stats.push(TorrentScrapeStatistics {
            seeders: NumberOfPeers(seeders),
            completed: NumberOfDownloads(completed),
            leechers: NumberOfPeers(leechers),
        });
    }

    Ok(stats)
}
