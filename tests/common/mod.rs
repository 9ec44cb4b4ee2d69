#![allow(dead_code)]
use rand::RngExt;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use torrust_scrape::scrape::structs::scrape_client::ScrapeClient;
use torrust_scrape::udp::enums::request::Request;
use torrust_scrape::udp::enums::response::Response;
use torrust_scrape::udp::structs::connect_response::ConnectResponse;
use torrust_scrape::udp::structs::connection_id::ConnectionId;
use torrust_scrape::udp::structs::error_response::ErrorResponse;
use torrust_scrape::udp::structs::info_hash::InfoHash;
use torrust_scrape::udp::structs::number_of_downloads::NumberOfDownloads;
use torrust_scrape::udp::structs::number_of_peers::NumberOfPeers;
use torrust_scrape::udp::structs::scrape_response::ScrapeResponse;
use torrust_scrape::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use torrust_scrape::udp::structs::transaction_id::TransactionId;
use torrust_scrape::udp::udp::MAX_PACKET_SIZE;

pub const HASH_A: &str = "176e2a9696092482d4acdef445b53ffcebb56960";
pub const HASH_B: &str = "e80cb87fbd938f3b1e47db64c10c3ab04ad49987";
pub const HASH_C: &str = "04098e49061bedb3f2d8f90204bf239019d198d9";

pub const CONNECTION_ID: u64 = 0x5EED_F00D_CAFE_BABE;

#[derive(Clone, Debug)]
pub enum Behaviour {
    Normal,
    /// Answers scrapes with a transaction ID that was never sent.
    ForeignTransactionId,
    RemoteError(String),
    /// Answers the handshake but never a scrape.
    SilentScrapes,
    /// Holds back the reply to the first scrape for the given delay.
    LateFirstScrape(Duration),
    Silent,
}

/// A UDP tracker on 127.0.0.1 built from the crate's own codec.
///
/// Scrape records are answered positionally from `stats`; missing entries are
/// reported as zeroes.
pub struct FakeTracker {
    pub addr: SocketAddr,
    packets: Arc<AtomicUsize>,
    connects: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl FakeTracker {
    pub async fn start(stats: Vec<(u32, u32, u32)>, behaviour: Behaviour) -> FakeTracker {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.expect("Failed to bind fake tracker"));
        let addr = socket.local_addr().expect("Failed to read fake tracker address");
        let packets = Arc::new(AtomicUsize::new(0));
        let connects = Arc::new(AtomicUsize::new(0));

        let handle = tokio::spawn(serve(socket, stats, behaviour, packets.clone(), connects.clone()));

        FakeTracker { addr, packets, connects, handle }
    }

    pub fn url(&self) -> String {
        format!("udp://{}/announce", self.addr)
    }

    pub fn packets(&self) -> usize {
        self.packets.load(Ordering::SeqCst)
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> ScrapeClient {
        ScrapeClient::new(&self.url())
            .expect("Fake tracker URL should be valid")
            .with_timeout(Duration::from_millis(200))
    }
}

impl Drop for FakeTracker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    socket: Arc<UdpSocket>,
    stats: Vec<(u32, u32, u32)>,
    behaviour: Behaviour,
    packets: Arc<AtomicUsize>,
    connects: Arc<AtomicUsize>,
) {
    let mut buffer = vec![0u8; MAX_PACKET_SIZE];
    let mut scrapes = 0usize;
    loop {
        let (received, peer) = match socket.recv_from(&mut buffer).await {
            Ok(datagram) => datagram,
            Err(_) => return,
        };
        packets.fetch_add(1, Ordering::SeqCst);

        let response = match Request::from_bytes(&buffer[..received]) {
            Ok(Request::Connect(request)) => {
                connects.fetch_add(1, Ordering::SeqCst);
                if matches!(behaviour, Behaviour::Silent) {
                    continue;
                }
                Response::from(ConnectResponse {
                    connection_id: ConnectionId(CONNECTION_ID),
                    transaction_id: request.transaction_id,
                })
            }
            Ok(Request::Scrape(request)) => {
                scrapes += 1;
                match &behaviour {
                    Behaviour::Silent | Behaviour::SilentScrapes => continue,
                    Behaviour::RemoteError(message) => Response::from(ErrorResponse {
                        transaction_id: request.transaction_id,
                        message: message.clone().into(),
                    }),
                    _ if request.connection_id != ConnectionId(CONNECTION_ID) => Response::from(ErrorResponse {
                        transaction_id: request.transaction_id,
                        message: "invalid connection id, please reconnect".into(),
                    }),
                    Behaviour::ForeignTransactionId => Response::from(ScrapeResponse {
                        transaction_id: TransactionId(request.transaction_id.0.wrapping_add(1)),
                        torrent_stats: records(&stats, request.info_hashes.len()),
                    }),
                    Behaviour::LateFirstScrape(delay) if scrapes == 1 => {
                        let late = Response::from(ScrapeResponse {
                            transaction_id: request.transaction_id,
                            torrent_stats: records(&stats, request.info_hashes.len()),
                        });
                        let (socket, delay) = (socket.clone(), *delay);
                        tokio::spawn(async move {
                            tokio::time::sleep(delay).await;
                            if let Ok(bytes) = late.write_to_vec() {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                        });
                        continue;
                    }
                    Behaviour::Normal | Behaviour::LateFirstScrape(_) => Response::from(ScrapeResponse {
                        transaction_id: request.transaction_id,
                        torrent_stats: records(&stats, request.info_hashes.len()),
                    }),
                }
            }
            Err(_) => continue,
        };

        if let Ok(bytes) = response.write_to_vec() {
            let _ = socket.send_to(&bytes, peer).await;
        }
    }
}

fn records(stats: &[(u32, u32, u32)], count: usize) -> Vec<TorrentScrapeStatistics> {
    (0..count)
        .map(|i| {
            let (seeders, completed, leechers) = stats.get(i).copied().unwrap_or_default();
            TorrentScrapeStatistics {
                seeders: NumberOfPeers(seeders),
                completed: NumberOfDownloads(completed),
                leechers: NumberOfPeers(leechers),
            }
        })
        .collect()
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}
