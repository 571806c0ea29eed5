use std::io::{self, Write};

use colored::*;
use sweepr_common::error::ValidationErrors;
use sweepr_core::scanner::{HostReport, HostStatus, ScanSummary};
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Writes one host block: a count line, one line per open port, then a blank line.
pub fn write_report<W: Write>(out: &mut W, report: &HostReport) -> io::Result<()> {
    match &report.status {
        HostStatus::Scanned => {
            writeln!(
                out,
                "Scan on host {} found {} open port(s).",
                report.host,
                report.open_ports.len()
            )?;
            for port in &report.open_ports {
                writeln!(out, "Port {port} is OPEN")?;
            }
        }
        HostStatus::Unresolvable(_) => {
            writeln!(out, "Scan on host {} failed: host could not be resolved.", report.host)?;
        }
    }
    writeln!(out)
}

pub fn validation_errors(errors: &ValidationErrors) {
    for message in errors.messages() {
        eprintln!("{}", message.red());
    }
    eprintln!();
    eprintln!("Run 'sweepr --help' for usage.");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    info!("{line}");
}

pub fn summary(summary: &ScanSummary, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let open: ColoredString = format!("{} open port(s)", summary.open_ports).bold().green();
    let hosts: ColoredString = format!("{} host(s)", summary.hosts_scanned).color(colors::IPV4_ADDR);
    let total_time: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64())
        .bold()
        .color(colors::ACCENT);

    info!(
        "{}",
        format!("Scan complete: {open} on {hosts} in {total_time}").color(colors::TEXT_DEFAULT)
    );
    if summary.hosts_unresolvable > 0 {
        info!("{} host(s) could not be resolved", summary.hosts_unresolvable);
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
