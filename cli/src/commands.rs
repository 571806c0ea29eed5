pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser};
use sweepr_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};

#[derive(Parser)]
#[command(name = "sweepr", version)]
#[command(about = "A TCP connect port scanner.")]
#[command(
    after_help = "Example: sweepr --hosts 127.0.0.1,127.0.0.2-127.0.0.5 --ports 80,443,8000-8005,9999"
)]
pub struct CommandLine {
    /// Hosts to scan, comma separated. Single addresses or ranges (e.g. 10.0.0.1-10.0.0.20)
    #[arg(short = 'H', long, value_delimiter = ',', num_args = 1.., required = true)]
    pub hosts: Vec<String>,

    /// Ports to scan, comma separated. Single ports or ranges (e.g. 8000-8005) [default: 0-1023]
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub ports: Option<Vec<String>>,

    /// Connection timeout per port, in milliseconds
    #[arg(short, long = "timeout", value_name = "MS", default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Maximum number of connection attempts in flight per host
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Less output (-q hides summaries, -qq prints only results)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            timeout: Duration::from_millis(self.timeout_ms),
            concurrency: self.concurrency,
            quiet: self.quiet,
            no_progress: self.no_progress,
        }
    }

    pub fn host_tokens(&self) -> Vec<&str> {
        self.hosts.iter().map(|t| t.trim()).collect()
    }

    pub fn port_tokens(&self) -> Option<Vec<&str>> {
        self.ports
            .as_ref()
            .map(|ports| ports.iter().map(|t| t.trim()).collect())
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
