mod boot;
mod cli;
mod logging;
mod paths;
mod poll_loop;
mod shutdown;

use std::process::ExitCode;
use std::time::Duration;

use rfgate_common::{GpioError, RfgateError};
use rfgate_config::{ConfigWatcher, FileSource};
use rfgate_platform::{RpiGpio, ShellRunner};

use crate::poll_loop::{PollLoop, PollTiming};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let base_dir = match args.base_dir.clone() {
        Some(dir) => dir,
        None => match paths::executable_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("rfgate: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let logfile = args.logfile().map(|p| paths::resolve(&base_dir, p));
    if let Err(e) = logging::init(args.log, logfile.as_deref()) {
        eprintln!("rfgate: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("rfgate v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(&args, &base_dir).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", failure_summary(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &cli::Args, base_dir: &std::path::Path) -> rfgate_common::Result<()> {
    let shutdown = shutdown::install();

    if !boot::warm_up(Duration::from_secs(args.warmup), &shutdown).await {
        return Ok(());
    }
    tracing::info!("Started app");

    let inputs_path = paths::resolve(base_dir, &args.inputspins);
    let source = FileSource::new(&inputs_path)?;
    let watcher = ConfigWatcher::open(source)?;
    let gpio = RpiGpio::new()?;

    let mut poll = PollLoop::new(watcher, gpio, ShellRunner::new(), PollTiming::default())?;
    let result = poll.run(shutdown).await;
    poll.shutdown();
    result
}

/// Final error line. Read failures were already logged with their input.
fn failure_summary(e: &RfgateError) -> String {
    match e {
        RfgateError::Gpio(GpioError::PinRead { .. }) => "poll loop failed, exiting".to_string(),
        other => other.to_string(),
    }
}
