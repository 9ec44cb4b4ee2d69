//! In-memory transport and dialer used by the unit tests.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::exchange::traits::datagram_transport::DatagramTransport;
use crate::exchange::traits::dialer::Dialer;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;

pub(crate) enum Reply {
    Datagram(Vec<u8>),
    TimedOut,
    Pending,
    Error(io::ErrorKind),
}

type Handler = Box<dyn FnMut(&[u8]) -> Reply + Send>;

/// Answers every `recv` by running the handler on the last datagram sent.
pub(crate) struct ScriptedTransport {
    sent: Mutex<Vec<Vec<u8>>>,
    handler: Mutex<Handler>,
    short_write: Option<usize>,
}

impl ScriptedTransport {
    pub(crate) fn new(handler: impl FnMut(&[u8]) -> Reply + Send + 'static) -> Self {
        ScriptedTransport {
            sent: Mutex::new(Vec::new()),
            handler: Mutex::new(Box::new(handler)),
            short_write: None,
        }
    }

    pub(crate) fn with_short_write(mut self, written: usize) -> Self {
        self.short_write = Some(written);
        self
    }

    pub(crate) fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn sends(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DatagramTransport for ScriptedTransport {
    async fn send(&self, buf: &[u8]) -> io::Result<usize> {
        self.sent.lock().unwrap().push(buf.to_vec());
        Ok(self.short_write.unwrap_or(buf.len()))
    }

    async fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        let last = self.sent.lock().unwrap().last().cloned().unwrap_or_default();
        let reply = {
            let mut handler = self.handler.lock().unwrap();
            (handler.as_mut())(&last)
        };
        match reply {
            Reply::Datagram(data) => {
                let len = data.len().min(buf.len());
                buf[..len].copy_from_slice(&data[..len]);
                Ok(len)
            }
            Reply::TimedOut => Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
            Reply::Pending => std::future::pending().await,
            Reply::Error(kind) => Err(io::Error::new(kind, "scripted failure")),
        }
    }
}

/// A well-behaved tracker: echoes transaction IDs, hands out `connection_id`
/// and answers scrapes positionally from `stats` as (seeders, completed, leechers).
pub(crate) fn tracker(connection_id: u64, stats: Vec<(u32, u32, u32)>) -> impl FnMut(&[u8]) -> Reply + Send + 'static {
    move |datagram| match Request::from_bytes(datagram) {
        Ok(Request::Connect(r)) => Reply::Datagram(Response::from(ConnectResponse {
            connection_id: ConnectionId(connection_id),
            transaction_id: r.transaction_id,
        }).write_to_vec().unwrap()),
        Ok(Request::Scrape(r)) => Reply::Datagram(Response::from(ScrapeResponse {
            transaction_id: r.transaction_id,
            torrent_stats: (0..r.info_hashes.len()).map(|i| {
                let (seeders, completed, leechers) = stats.get(i).copied().unwrap_or_default();
                TorrentScrapeStatistics {
                    seeders: NumberOfPeers(seeders),
                    completed: NumberOfDownloads(completed),
                    leechers: NumberOfPeers(leechers),
                }
            }).collect(),
        }).write_to_vec().unwrap()),
        Err(_) => Reply::TimedOut,
    }
}

/// Hands out the queued transports in order, failing once the queue is empty.
pub(crate) struct ScriptedDialer {
    transports: Mutex<VecDeque<Arc<ScriptedTransport>>>,
    dials: AtomicUsize,
}

impl ScriptedDialer {
    pub(crate) fn new(transports: Vec<Arc<ScriptedTransport>>) -> Self {
        ScriptedDialer {
            transports: Mutex::new(transports.into()),
            dials: AtomicUsize::new(0),
        }
    }

    pub(crate) fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dialer for ScriptedDialer {
    async fn dial(&self, address: &str) -> io::Result<Arc<dyn DatagramTransport>> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        match self.transports.lock().unwrap().pop_front() {
            Some(transport) => Ok(transport),
            None => Err(io::Error::new(io::ErrorKind::ConnectionRefused, format!("cannot reach {address}"))),
        }
    }
}
