use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

/// Observed state of a single (host, port) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Open,
    Closed,
}

impl PortState {
    pub fn is_open(self) -> bool {
        matches!(self, PortState::Open)
    }
}

/// Attempts a full TCP handshake with `addr`, giving up after `probe_timeout`.
///
/// Refused, timed-out and otherwise failed attempts are all `Closed`. An
/// accepted connection is shut down straight away; a failure to shut it down
/// is logged and does not change the result.
pub async fn connect_probe(addr: SocketAddr, probe_timeout: Duration) -> PortState {
    match timeout(probe_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            release(stream, addr).await;
            PortState::Open
        }
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => {
            trace!("{addr} refused the connection");
            PortState::Closed
        }
        Ok(Err(e)) => {
            trace!("Connecting to {addr} failed: {e}");
            PortState::Closed
        }
        Err(_elapsed) => {
            trace!("{addr} did not answer within {}ms", probe_timeout.as_millis());
            PortState::Closed
        }
    }
}

async fn release(mut stream: TcpStream, addr: SocketAddr) {
    if let Err(e) = stream.shutdown().await {
        debug!("Failed to close connection to {addr}: {e}");
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Instant;
    use tokio::net::TcpListener;

    const PROBE_TIMEOUT: Duration = Duration::from_millis(200);

    #[tokio::test]
    async fn connect_probe_should_find_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        assert_eq!(connect_probe(addr, PROBE_TIMEOUT).await, PortState::Open);
    }

    #[tokio::test]
    async fn connect_probe_should_report_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert_eq!(connect_probe(addr, PROBE_TIMEOUT).await, PortState::Closed);
    }

    #[tokio::test]
    #[ignore]
    async fn connect_probe_should_find_known_open_port() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 443);
        assert!(connect_probe(addr, Duration::from_secs(1)).await.is_open());
    }

    #[tokio::test]
    #[ignore]
    async fn connect_probe_should_timeout_on_unreachable_ip() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 1)), 443);
        let started = Instant::now();

        assert_eq!(connect_probe(addr, PROBE_TIMEOUT).await, PortState::Closed);
        assert!(started.elapsed() < PROBE_TIMEOUT * 3);
    }
}
