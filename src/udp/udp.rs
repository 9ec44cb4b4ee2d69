/// Magic constant sent in place of a connection ID in every connect request.
pub const PROTOCOL_IDENTIFIER: u64 = 0x0000_0417_2710_1980;

pub const ACTION_CONNECT: u32 = 0;
pub const ACTION_ANNOUNCE: u32 = 1;
pub const ACTION_SCRAPE: u32 = 2;
pub const ACTION_ERROR: u32 = 3;

/// A single scrape datagram can carry at most 74 info hashes.
pub const MAX_SCRAPE_TORRENTS: usize = 74;
pub const MAX_PACKET_SIZE: usize = 1496;

pub const INFO_HASH_SIZE: usize = 20;
pub const CONNECT_PACKET_SIZE: usize = 16;
pub const REQUEST_HEADER_SIZE: usize = 16;
pub const RESPONSE_HEADER_SIZE: usize = 8;
pub const SCRAPE_RECORD_SIZE: usize = 12;

#[inline]
pub const fn connect_packet_size() -> usize {
    CONNECT_PACKET_SIZE
}

#[inline]
pub const fn scrape_request_size(torrents: usize) -> usize {
    REQUEST_HEADER_SIZE + (INFO_HASH_SIZE * torrents)
}

#[inline]
pub const fn scrape_response_size(torrents: usize) -> usize {
    RESPONSE_HEADER_SIZE + (SCRAPE_RECORD_SIZE * torrents)
}
