use std::io::{Cursor, Read, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::packet_error::PacketError;
use crate::udp::enums::request::Request;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::info_hash::InfoHash;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{connect_packet_size, scrape_request_size, ACTION_CONNECT, ACTION_SCRAPE, INFO_HASH_SIZE, MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER, REQUEST_HEADER_SIZE};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeRequest> for Request {
    fn from(r: ScrapeRequest) -> Self {
        Self::Scrape(r)
    }
}

impl Request {
    #[inline]
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Request::Connect(r) => r.transaction_id,
            Request::Scrape(r) => r.transaction_id,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        match self {
            Request::Connect(_) => connect_packet_size(),
            Request::Scrape(r) => scrape_request_size(r.info_hashes.len()),
        }
    }

    #[tracing::instrument(skip(self, bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), PacketError> {
        match self {
            Request::Connect(r) => {
                bytes.write_u64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_u32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Scrape(r) => {
                if r.info_hashes.len() > MAX_SCRAPE_TORRENTS {
                    return Err(PacketError::TooManyInfoHashes(r.info_hashes.len()));
                }

                bytes.write_u64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_u32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;

                for info_hash in &r.info_hashes {
                    bytes.write_all(&info_hash.0)?;
                }
            }
        }

        Ok(())
    }

    /// Encodes the request into a buffer of exactly [`Request::size`] bytes.
    ///
    /// The info hash count of a scrape request is checked before anything is
    /// allocated.
    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, PacketError> {
        if let Request::Scrape(r) = self {
            if r.info_hashes.len() > MAX_SCRAPE_TORRENTS {
                return Err(PacketError::TooManyInfoHashes(r.info_hashes.len()));
            }
        }
        let mut buffer = Vec::with_capacity(self.size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() < REQUEST_HEADER_SIZE {
            return Err(PacketError::Truncated { expected: REQUEST_HEADER_SIZE, received: bytes.len() });
        }

        let mut cursor = Cursor::new(bytes);
        let connection_id = cursor.read_u64::<NetworkEndian>()?;
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = TransactionId(cursor.read_u32::<NetworkEndian>()?);

        match action {
            ACTION_CONNECT => {
                if connection_id != PROTOCOL_IDENTIFIER {
                    return Err(PacketError::ProtocolIdentifierMissing);
                }
                Ok(ConnectRequest { transaction_id }.into())
            }

            ACTION_SCRAPE => {
                let remaining = bytes.len() - REQUEST_HEADER_SIZE;
                let count = remaining / INFO_HASH_SIZE;
                if remaining % INFO_HASH_SIZE != 0 {
                    return Err(PacketError::Truncated {
                        expected: scrape_request_size(count + 1),
                        received: bytes.len(),
                    });
                }
                if count > MAX_SCRAPE_TORRENTS {
                    return Err(PacketError::TooManyInfoHashes(count));
                }

                let mut info_hashes = Vec::with_capacity(count);
                for _ in 0..count {
                    let mut info_hash = [0u8; INFO_HASH_SIZE];
                    cursor.read_exact(&mut info_hash)?;
                    info_hashes.push(InfoHash(info_hash));
                }

                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                    info_hashes,
                }.into())
            }

            _ => Err(PacketError::UnknownAction { action, transaction_id }),
        }
    }
}
