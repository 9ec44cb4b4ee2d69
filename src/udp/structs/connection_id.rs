/// Tracker-issued token authorizing scrape requests for a limited time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ConnectionId(pub u64);
