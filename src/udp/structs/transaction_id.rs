/// Per-request correlation token echoed back by the tracker.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TransactionId(pub u32);
