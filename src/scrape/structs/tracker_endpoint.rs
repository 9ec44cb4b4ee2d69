/// A tracker address whose URL scheme was checked to be `udp`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TrackerEndpoint {
    pub(crate) host: String,
    pub(crate) port: u16,
}
