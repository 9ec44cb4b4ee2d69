use std::time::Duration;

/// How long a tracker-issued connection ID stays usable (BEP 15).
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(60);
