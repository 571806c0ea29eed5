use sweepr_common::{config::Config, plan::ScanPlan};
use sweepr_core::scanner::{HostReport, PortScanner, ScanSummary};
use tracing::Instrument;

use crate::terminal::{print, spinner};

/// Runs the scan for an already validated plan, streaming each host's report to stdout.
pub async fn scan(plan: ScanPlan, cfg: &Config) -> anyhow::Result<()> {
    let show_progress: bool = !cfg.no_progress && cfg.quiet == 0;
    let span = spinner::scan_span(show_progress);
    let progress = spinner::ScanProgress::new(span.clone());

    let scanner = PortScanner::tcp(cfg);
    let (_reports, summary): (Vec<HostReport>, ScanSummary) =
        scanner.scan(&plan, &progress).instrument(span).await;

    print::summary(&summary, cfg.quiet);
    Ok(())
}
