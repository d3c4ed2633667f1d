// src/main.rs

use pollwatch::config::MonitorConfig;
use pollwatch::errors::PollwatchError;
use pollwatch::{cli, logging, run};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run_main().await {
        std::process::exit(err.exit_code());
    }
}

async fn run_main() -> Result<(), PollwatchError> {
    let args = cli::parse();

    if let Err(e) = logging::init_logging(args.verbose) {
        eprintln!("pollwatch: {e:#}");
    }

    let config = match MonitorConfig::try_from(args) {
        Ok(cfg) => cfg,
        Err(PollwatchError::MissingCommand) => {
            eprintln!("{}", cli::usage());
            return Err(PollwatchError::MissingCommand);
        }
        Err(err) => {
            error!("{err}");
            return Err(err);
        }
    };

    run(config).await.inspect_err(|err| error!("pollwatch error: {err:?}"))
}
