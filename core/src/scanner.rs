//! The scan **orchestrator**.
//!
//! Hosts are scanned one after another in plan order. Inside a host, ports
//! are probed concurrently with at most [`Config::concurrency`] connection
//! attempts in flight, and the host's [`HostReport`] is only emitted once
//! every one of its ports has been tried.
//!
//! **Ordering:** attempts finish in any order, so open ports are discovered
//! out of order. Before a report is emitted its open ports are put back into
//! port-list order, which keeps the output identical to a sequential scan.
//!
//! The network itself sits behind the [`Prober`] trait so the orchestration
//! can be exercised without touching real sockets.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn};

use sweepr_common::config::Config;
use sweepr_common::network::address::Address;
use sweepr_common::network::ports::PortSet;
use sweepr_common::plan::ScanPlan;

use crate::error::ScanError;
use crate::network::tcp::{self, PortState};

mod resolver;

/// Network access used by the scanner.
#[async_trait]
pub trait Prober: Send + Sync + 'static {
    /// Finds the address a host's ports are probed on.
    async fn resolve(&self, host: &Address) -> Result<IpAddr, ScanError> {
        resolver::resolve_ipv4(host).await
    }

    /// Tries one connection and reports whether it was accepted.
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> PortState;
}

/// Plain TCP connect-scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnectProber;

#[async_trait]
impl Prober for TcpConnectProber {
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> PortState {
        tcp::connect_probe(addr, timeout).await
    }
}

/// Hooks fired while a scan runs. Every hook defaults to doing nothing.
pub trait ScanObserver {
    fn host_started(&self, _host: &Address, _ports: usize) {}

    fn port_finished(&self, _host: &Address, _port: u16, _state: PortState) {}

    fn host_finished(&self, _report: &HostReport) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostStatus {
    Scanned,
    /// Name resolution failed; no port was tried.
    Unresolvable(String),
}

/// Result of scanning a single host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub host: Address,
    pub status: HostStatus,
    /// Open ports in port-list order.
    pub open_ports: Vec<u16>,
}

impl HostReport {
    fn unresolvable(host: Address, reason: String) -> Self {
        Self {
            host,
            status: HostStatus::Unresolvable(reason),
            open_ports: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == HostStatus::Scanned
    }
}

/// Totals over a finished scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub hosts_scanned: usize,
    pub hosts_unresolvable: usize,
    pub open_ports: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn from_reports(reports: &[HostReport], elapsed: Duration) -> Self {
        let hosts_unresolvable = reports.iter().filter(|r| !r.is_resolved()).count();
        Self {
            hosts_scanned: reports.len() - hosts_unresolvable,
            hosts_unresolvable,
            open_ports: reports.iter().map(|r| r.open_ports.len()).sum(),
            elapsed,
        }
    }
}

pub struct PortScanner<P: Prober> {
    prober: Arc<P>,
    timeout: Duration,
    concurrency: usize,
}

impl PortScanner<TcpConnectProber> {
    pub fn tcp(cfg: &Config) -> Self {
        Self::new(TcpConnectProber, cfg)
    }
}

impl<P: Prober> PortScanner<P> {
    pub fn new(prober: P, cfg: &Config) -> Self {
        Self {
            prober: Arc::new(prober),
            timeout: cfg.timeout,
            concurrency: cfg.concurrency(),
        }
    }

    /// Scans every host of `plan` and returns one report per host, in plan order.
    ///
    /// Runs to completion; no failure of a single attempt or host stops it.
    pub async fn scan<O>(&self, plan: &ScanPlan, observer: &O) -> (Vec<HostReport>, ScanSummary)
    where
        O: ScanObserver + ?Sized,
    {
        let start_time: Instant = Instant::now();
        let mut reports: Vec<HostReport> = Vec::with_capacity(plan.hosts().len());

        for host in plan.hosts() {
            let report: HostReport = self.scan_host(*host, plan.ports(), observer).await;
            observer.host_finished(&report);
            reports.push(report);
        }

        let summary = ScanSummary::from_reports(&reports, start_time.elapsed());
        (reports, summary)
    }

    async fn scan_host<O>(&self, host: Address, ports: &PortSet, observer: &O) -> HostReport
    where
        O: ScanObserver + ?Sized,
    {
        let ip: IpAddr = match self.prober.resolve(&host).await {
            Ok(ip) => ip,
            Err(e) => {
                warn!("{e}");
                return HostReport::unresolvable(host, e.to_string());
            }
        };

        info!("Scanning {} port(s) on {host}", ports.len());
        observer.host_started(&host, ports.len());

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks: JoinSet<(u16, PortState)> = JoinSet::new();
        let mut open_ports: Vec<u16> = Vec::new();

        for port in ports.iter() {
            // Never closed, so acquiring only fails if that invariant breaks.
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                error!("Probe limiter closed while scanning {host}");
                break;
            };

            let prober: Arc<P> = Arc::clone(&self.prober);
            let addr = SocketAddr::new(ip, port);
            let timeout: Duration = self.timeout;
            tasks.spawn(async move {
                let state: PortState = prober.probe(addr, timeout).await;
                drop(permit);
                (port, state)
            });

            while let Some(joined) = tasks.try_join_next() {
                record(joined, &host, &mut open_ports, observer);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            record(joined, &host, &mut open_ports, observer);
        }

        open_ports.sort_by_key(|port| ports.position(*port));
        debug!("{host}: {} open port(s)", open_ports.len());

        HostReport {
            host,
            status: HostStatus::Scanned,
            open_ports,
        }
    }
}

fn record<O>(
    joined: Result<(u16, PortState), JoinError>,
    host: &Address,
    open_ports: &mut Vec<u16>,
    observer: &O,
) where
    O: ScanObserver + ?Sized,
{
    match joined {
        Ok((port, state)) => {
            if state.is_open() {
                debug!("{host}:{port} is open");
                open_ports.push(port);
            }
            observer.port_finished(host, port, state);
        }
        // a probe that died is counted as closed
        Err(e) => error!("Probe task for {host} failed: {e}"),
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
