use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::udp::enums::packet_error::PacketError;
use crate::udp::structs::response_header::ResponseHeader;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::RESPONSE_HEADER_SIZE;

impl ResponseHeader {
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() < RESPONSE_HEADER_SIZE {
            return Err(PacketError::Truncated { expected: RESPONSE_HEADER_SIZE, received: bytes.len() });
        }

        let mut cursor = Cursor::new(bytes);
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        Ok(ResponseHeader {
            action,
            transaction_id: TransactionId(transaction_id),
        })
    }
}
