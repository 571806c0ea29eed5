use std::io;

use sweepr_common::network::address::Address;
use thiserror::Error;

/// Host-level failures raised while a scan is running.
///
/// None of these abort a scan; the affected host is reported with no open ports.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("host {host} could not be resolved: {source}")]
    Unresolvable {
        host: Address,
        #[source]
        source: io::Error,
    },
    #[error("host {host} did not resolve to an IPv4 address")]
    NoIpv4Address { host: Address },
}
