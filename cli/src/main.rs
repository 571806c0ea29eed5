mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, scan};
use sweepr_common::plan::ScanPlan;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet)?;

    let cfg = commands.config();
    let port_tokens = commands.port_tokens();

    let plan = match ScanPlan::from_tokens(&commands.host_tokens(), port_tokens.as_deref()) {
        Ok(plan) => plan,
        Err(errors) => {
            print::validation_errors(&errors);
            return Ok(ExitCode::FAILURE);
        }
    };

    print::header("starting scanner", cfg.quiet);
    scan::scan(plan, &cfg).await?;
    Ok(ExitCode::SUCCESS)
}
