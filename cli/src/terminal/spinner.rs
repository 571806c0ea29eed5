use std::io::{self, Write};

use colored::*;
use indicatif::ProgressStyle;
use sweepr_common::network::address::Address;
use sweepr_core::network::tcp::PortState;
use sweepr_core::scanner::{HostReport, ScanObserver};
use tracing::{Span, error, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_indicatif::suspend_tracing_indicatif;

use crate::terminal::print;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Creates the span that carries the progress bar.
///
/// When `show` is false the span carries no `indicatif.pb_show` field and
/// the progress layer ignores it.
pub fn scan_span(show: bool) -> Span {
    let span = if show {
        info_span!("scan", indicatif.pb_show = true)
    } else {
        info_span!("scan")
    };

    if show && let Ok(style) = ProgressStyle::with_template(
        "{spinner:.blue} {msg} {wide_bar:.blue/white.dim} {pos}/{len}",
    ) {
        span.pb_set_style(&style.tick_strings(TICK_STRINGS));
    }
    span
}

/// Drives the progress bar and prints each host's report as soon as it is final.
pub struct ScanProgress {
    span: Span,
}

impl ScanProgress {
    pub fn new(span: Span) -> Self {
        Self { span }
    }
}

impl ScanObserver for ScanProgress {
    fn host_started(&self, host: &Address, ports: usize) {
        self.span.pb_set_length(ports as u64);
        self.span.pb_set_position(0);
        self.span
            .pb_set_message(&format!("Scanning {}", host.to_string().bold()));
    }

    fn port_finished(&self, _host: &Address, _port: u16, _state: PortState) {
        self.span.pb_inc(1);
    }

    fn host_finished(&self, report: &HostReport) {
        let written = suspend_tracing_indicatif(|| {
            let mut out = io::stdout().lock();
            print::write_report(&mut out, report).and_then(|_| out.flush())
        });
        if let Err(e) = written {
            error!("Failed to write report for {}: {e}", report.host);
        }
    }
}
