use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);
pub const DEFAULT_CONCURRENCY: usize = 128;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound on a single connection attempt.
    pub timeout: Duration,
    /// Maximum number of connection attempts in flight for one host.
    ///
    /// Values below 1 are treated as 1.
    pub concurrency: usize,
    /// 0 prints everything, 1 hides banners and summaries, 2 prints only results.
    pub quiet: u8,
    /// Hides the progress spinner.
    pub no_progress: bool,
}

impl Config {
    pub fn concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            quiet: 0,
            no_progress: false,
        }
    }
}
