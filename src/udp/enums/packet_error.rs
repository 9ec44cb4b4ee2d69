use std::io;
use thiserror::Error;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::MAX_SCRAPE_TORRENTS;

#[derive(Debug, Error)]
pub enum PacketError {
    #[error("packet too short: expected at least {expected} bytes, got {received}")]
    Truncated { expected: usize, received: usize },
    #[error("unknown action {action}")]
    UnknownAction { action: u32, transaction_id: TransactionId },
    #[error("protocol identifier missing")]
    ProtocolIdentifierMissing,
    #[error("cannot scrape {0} info hashes at once (maximum {max})", max = MAX_SCRAPE_TORRENTS)]
    TooManyInfoHashes(usize),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
