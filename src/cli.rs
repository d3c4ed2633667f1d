// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{CommandFactory, Parser};

/// Command-line arguments for `pollwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pollwatch",
    version,
    about = "Run a command whenever a matching file under the current directory changes.",
    long_about = None
)]
pub struct CliArgs {
    /// How often to check for updates (seconds).
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Regex for the file names to monitor, matched at the start of the name.
    #[arg(short, long, value_name = "REGEX", default_value = ".*")]
    pub pattern: String,

    /// Command to execute upon file change.
    ///
    /// Split on whitespace; no shell is involved. Required.
    #[arg(short, long = "cmd", value_name = "COMMAND")]
    pub cmd: Option<String>,

    /// Verbose mode (log progress and diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the process arguments.
///
/// `--help` and `--version` print and exit 0 as usual. Any other parse
/// error is printed and terminates the process with status 1.
pub fn parse() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    }
}

/// One-line usage text, e.g. `Usage: pollwatch [OPTIONS]`.
pub fn usage() -> String {
    CliArgs::command().render_usage().to_string()
}
