use std::io;
use std::time::Duration;
use log::{debug, warn};
use tokio::time::timeout;
use crate::exchange::traits::datagram_transport::DatagramTransport;
use crate::scrape::enums::scrape_error::ScrapeError;
use crate::udp::udp::MAX_PACKET_SIZE;

/// Deadline applied to every single send and receive.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Additional attempts made after the first one timed out.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Whether an I/O error means "deadline expired" rather than a broken transport.
#[inline]
pub fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

/// Performs one request/response cycle, resending on receive timeouts.
///
/// At most `max_retries + 1` datagrams are sent. A short write, a reply shorter
/// than `expected_min_len`, and any transport error other than a receive
/// timeout end the exchange immediately.
#[tracing::instrument(level = "debug", skip(transport, outbound))]
pub async fn exchange(
    transport: &dyn DatagramTransport,
    outbound: &[u8],
    expected_min_len: usize,
    per_attempt_timeout: Duration,
    max_retries: u32,
) -> Result<Vec<u8>, ScrapeError> {
    let mut response = vec![0u8; expected_min_len.max(MAX_PACKET_SIZE)];
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;

        let written = match timeout(per_attempt_timeout, transport.send(outbound)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "datagram write deadline exceeded").into());
            }
        };
        if written != outbound.len() {
            return Err(ScrapeError::IncompleteWrite { written, expected: outbound.len() });
        }

        let received = match timeout(per_attempt_timeout, transport.recv(&mut response)).await {
            Ok(Ok(received)) => received,
            Ok(Err(error)) if !is_timeout(&error) => return Err(error.into()),
            _ => {
                if attempts > max_retries {
                    warn!("[EXCHANGE] No reply after {attempts} attempts, giving up");
                    return Err(ScrapeError::RetryLimitExceeded { attempts });
                }
                debug!("[EXCHANGE] Attempt {attempts} timed out after {per_attempt_timeout:?}, retrying");
                continue;
            }
        };

        if received < expected_min_len {
            return Err(ScrapeError::InvalidResponse(format!(
                "expected at least {expected_min_len} bytes, received {received}"
            )));
        }

        response.truncate(received);
        return Ok(response);
    }
}
