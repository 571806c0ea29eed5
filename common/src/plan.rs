//! # Scan Plan
//!
//! The validation boundary between the argument layer and the scanner.
//! Both options are validated independently so a single run reports every
//! broken option at once; the scanner only ever sees a fully valid plan.

use tracing::info;

use crate::error::{TargetError, ValidationErrors};
use crate::network::ports::{self, PortSet};
use crate::network::target::{self, HostSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    hosts: HostSet,
    ports: PortSet,
}

impl ScanPlan {
    /// Validates raw host and port tokens.
    ///
    /// Port errors are listed before host errors. Each option contributes at
    /// most one error, the first one found in it.
    pub fn from_tokens<H, P>(hosts: &[H], ports: Option<&[P]>) -> Result<Self, ValidationErrors>
    where
        H: AsRef<str>,
        P: AsRef<str>,
    {
        let port_result = ports::expand_ports(ports);
        let host_result = target::expand_hosts(hosts);

        match (host_result, port_result) {
            (Ok(hosts), Ok(ports)) => {
                let plan = Self { hosts, ports };
                info!(
                    "{} host(s) and {} port(s) queued, {} probe(s) in total",
                    plan.hosts.len(),
                    plan.ports.len(),
                    plan.probe_count()
                );
                Ok(plan)
            }
            (host_result, port_result) => {
                let errors: Vec<TargetError> = [port_result.err(), host_result.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ValidationErrors::new(errors))
            }
        }
    }

    pub fn new(hosts: HostSet, ports: PortSet) -> Self {
        Self { hosts, ports }
    }

    pub fn hosts(&self) -> &HostSet {
        &self.hosts
    }

    pub fn ports(&self) -> &PortSet {
        &self.ports
    }

    /// Number of (host, port) connection attempts this plan requires.
    pub fn probe_count(&self) -> usize {
        self.hosts.len() * self.ports.len()
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
