#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SessionState {
    NoSession,
    Fresh,
    Stale,
}
