use crate::udp::structs::transaction_id::TransactionId;

/// The 8 bytes every tracker response starts with.
///
/// Decoded on its own so the transaction ID can be checked before the body is
/// interpreted according to the action.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResponseHeader {
    pub action: u32,
    pub transaction_id: TransactionId,
}
