use rand::RngExt;
use crate::udp::structs::transaction_id::TransactionId;

impl TransactionId {
    /// Draws a fresh ID from the thread-local CSPRNG.
    pub fn random() -> Self {
        TransactionId(rand::rng().random())
    }

    /// Draws a fresh ID that differs from `previous`.
    pub fn random_except(previous: TransactionId) -> Self {
        loop {
            let candidate = Self::random();
            if candidate != previous {
                return candidate;
            }
        }
    }
}
