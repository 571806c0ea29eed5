use std::net::{IpAddr, SocketAddr};

use sweepr_common::network::address::Address;
use tokio::net::lookup_host;

use crate::error::ScanError;

/// Resolves `host` to the IPv4 address its ports are probed on.
pub async fn resolve_ipv4(host: &Address) -> Result<IpAddr, ScanError> {
    let mut addrs = lookup_host((host.to_string(), 0))
        .await
        .map_err(|source| ScanError::Unresolvable {
            host: *host,
            source,
        })?;

    addrs
        .find(SocketAddr::is_ipv4)
        .map(|addr| addr.ip())
        .ok_or(ScanError::NoIpv4Address { host: *host })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
