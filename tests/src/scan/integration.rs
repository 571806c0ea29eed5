#![cfg(test)]
use std::time::{Duration, Instant};

use sweepr_common::config::Config;
use sweepr_common::network::address::Address;
use sweepr_common::plan::ScanPlan;
use sweepr_core::scanner::{HostStatus, NoopObserver, PortScanner};
use tokio::net::TcpListener;

/// Binds `count` listeners on 127.0.0.1 and keeps them accepting.
async fn listeners(count: usize) -> (Vec<TcpListener>, Vec<u16>) {
    let mut held = Vec::new();
    let mut ports = Vec::new();
    for _ in 0..count {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        ports.push(listener.local_addr().unwrap().port());
        held.push(listener);
    }
    (held, ports)
}

/// Ports that were just released, so nothing listens on them.
async fn closed_ports(count: usize) -> Vec<u16> {
    let (held, ports) = listeners(count).await;
    drop(held);
    ports
}

fn config() -> Config {
    Config {
        timeout: Duration::from_millis(200),
        concurrency: 8,
        ..Config::default()
    }
}

/// Mirrors the classic usage: a host range plus a single host, mixed port tokens.
#[tokio::test]
async fn scan_reports_only_listening_ports() {
    let (_held, open) = listeners(3).await;
    let closed = closed_ports(2).await;

    let port_tokens: Vec<String> = open
        .iter()
        .chain(closed.iter())
        .map(u16::to_string)
        .collect();
    let plan = ScanPlan::from_tokens(&["127.0.0.1-127.0.0.1", "127.0.0.1"], Some(&port_tokens[..]))
        .expect("tokens should validate");
    assert_eq!(plan.hosts().len(), 1);

    let scanner = PortScanner::tcp(&config());
    let (reports, summary) = scanner.scan(&plan, &NoopObserver).await;

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.host, Address::new(127, 0, 0, 1));
    assert_eq!(report.status, HostStatus::Scanned);
    assert_eq!(report.open_ports, open);
    for port in &closed {
        assert!(!report.open_ports.contains(port), "port {port} reported open");
    }
    assert_eq!(summary.open_ports, 3);
}

#[tokio::test]
async fn scan_of_port_range_finds_listener_inside_it() {
    let (_held, open) = listeners(1).await;
    let port = open[0];
    let start = port.saturating_sub(2);
    let end = port.saturating_add(2);
    let tokens = [format!("{start}-{end}")];

    let plan = ScanPlan::from_tokens(&["127.0.0.1"], Some(&tokens[..])).unwrap();
    let (reports, _) = PortScanner::tcp(&config()).scan(&plan, &NoopObserver).await;

    assert!(reports[0].open_ports.contains(&port));
}

#[tokio::test]
async fn every_host_in_range_gets_a_report() {
    let plan = ScanPlan::from_tokens(&["127.0.0.1-127.0.0.3"], Some(&["1"][..])).unwrap();
    let (reports, summary) = PortScanner::tcp(&config()).scan(&plan, &NoopObserver).await;

    let hosts: Vec<String> = reports.iter().map(|r| r.host.to_string()).collect();
    assert_eq!(hosts, vec!["127.0.0.1", "127.0.0.2", "127.0.0.3"]);
    assert_eq!(summary.hosts_scanned, 3);
}

#[tokio::test]
async fn open_port_is_found_within_timeout_bound() {
    let (_held, open) = listeners(1).await;
    let closed = closed_ports(4).await;
    let tokens: Vec<String> = closed.iter().chain(open.iter()).map(u16::to_string).collect();

    let cfg = Config {
        timeout: Duration::from_millis(200),
        concurrency: 1,
        ..Config::default()
    };
    let plan = ScanPlan::from_tokens(&["127.0.0.1"], Some(&tokens[..])).unwrap();

    let started = Instant::now();
    let (reports, _) = PortScanner::tcp(&cfg).scan(&plan, &NoopObserver).await;

    assert_eq!(reports[0].open_ports, open);
    assert!(
        started.elapsed() <= cfg.timeout * tokens.len() as u32,
        "scan took {:?}",
        started.elapsed()
    );
}

#[test]
fn invalid_tokens_never_reach_the_scanner() {
    let errors = ScanPlan::from_tokens(&["128.0.0.3-127.0.0.2"], Some(&["18-65536"][..]))
        .unwrap_err();
    let messages = errors.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("0-65535"));
    assert!(messages[1].contains("must not precede the start"));
}
