use std::io;
use thiserror::Error;
use crate::udp::enums::packet_error::PacketError;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::MAX_SCRAPE_TORRENTS;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unsupported scrape scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid tracker url: {0}")]
    InvalidUrl(String),

    #[error("cannot lookup more than {max} infohash at once ({requested} requested)", max = MAX_SCRAPE_TORRENTS)]
    TooManyInfohash { requested: usize },

    #[error("malformed infohash: {0:?}")]
    MalformedInfohash(String),

    #[error("udp packet was not entirely written ({written} of {expected} bytes)")]
    IncompleteWrite { written: usize, expected: usize },

    #[error("invalid response received from tracker: {0}")]
    InvalidResponse(String),

    #[error("invalid action {action}")]
    InvalidAction { action: u32 },

    #[error("invalid transaction id received (sent {sent:?}, received {received:?})")]
    InvalidTransactionID { sent: TransactionId, received: TransactionId },

    #[error("service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("maximum number of retries exceeded after {attempts} attempts")]
    RetryLimitExceeded { attempts: u32 },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<PacketError> for ScrapeError {
    fn from(error: PacketError) -> Self {
        match error {
            PacketError::UnknownAction { action, .. } => ScrapeError::InvalidAction { action },
            PacketError::TooManyInfoHashes(requested) => ScrapeError::TooManyInfohash { requested },
            PacketError::Io(error) => ScrapeError::Io(error),
            other => ScrapeError::InvalidResponse(other.to_string()),
        }
    }
}
