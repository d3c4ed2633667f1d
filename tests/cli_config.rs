// tests/cli_config.rs

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use pollwatch::cli::{usage, CliArgs};
use pollwatch::config::MonitorConfig;
use pollwatch::errors::PollwatchError;

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse_from(std::iter::once("pollwatch").chain(args.iter().copied()))
}

#[test]
fn defaults_apply_when_only_cmd_is_given() {
    let args = parse(&["-c", "make"]).unwrap();
    assert_eq!(args.interval, 1);
    assert_eq!(args.pattern, ".*");
    assert!(!args.verbose);

    let cfg = MonitorConfig::try_from(args).unwrap();
    assert_eq!(cfg.interval, Duration::from_secs(1));
    assert_eq!(cfg.pattern.as_str(), ".*");
    assert_eq!(cfg.command.program(), "make");
    assert!(cfg.command.args().is_empty());
    assert_eq!(cfg.root, PathBuf::from("."));
}

#[test]
fn long_and_short_flags_are_equivalent() {
    let short = parse(&["-i", "5", "-p", r".*\.tex", "-c", "pdflatex main.tex", "-v"]).unwrap();
    let long = parse(&[
        "--interval",
        "5",
        "--pattern",
        r".*\.tex",
        "--cmd",
        "pdflatex main.tex",
        "--verbose",
    ])
    .unwrap();

    for args in [short, long] {
        let cfg = MonitorConfig::try_from(args).unwrap();
        assert_eq!(cfg.interval, Duration::from_secs(5));
        assert_eq!(cfg.pattern.as_str(), r".*\.tex");
        assert_eq!(cfg.command.argv(), vec!["pdflatex", "main.tex"]);
        assert!(cfg.verbose);
    }
}

#[test]
fn missing_cmd_is_rejected_at_validation() {
    let args = parse(&["-i", "2"]).unwrap();
    assert!(matches!(
        MonitorConfig::try_from(args),
        Err(PollwatchError::MissingCommand)
    ));
}

#[test]
fn blank_cmd_counts_as_missing() {
    let args = parse(&["-c", "   "]).unwrap();
    let err = MonitorConfig::try_from(args).unwrap_err();
    assert!(matches!(err, PollwatchError::MissingCommand));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn invalid_pattern_is_rejected_before_the_loop() {
    let args = parse(&["-c", "make", "-p", "("]).unwrap();
    assert!(matches!(
        MonitorConfig::try_from(args),
        Err(PollwatchError::InvalidPattern { .. })
    ));
}

#[test]
fn zero_or_non_numeric_interval_is_a_parse_error() {
    assert!(parse(&["-c", "make", "-i", "0"]).is_err());
    assert!(parse(&["-c", "make", "-i", "abc"]).is_err());
    assert!(parse(&["-c", "make", "-i", "-3"]).is_err());
}

#[test]
fn zero_interval_is_rejected_by_validation_too() {
    let args = CliArgs {
        interval: 0,
        pattern: ".*".to_string(),
        cmd: Some("make".to_string()),
        verbose: false,
    };
    assert!(matches!(
        MonitorConfig::try_from(args),
        Err(PollwatchError::ConfigError(_))
    ));
}

#[test]
fn usage_mentions_binary_name() {
    assert!(usage().contains("pollwatch"));
}

#[test]
fn verbosity_selects_log_level() {
    assert_eq!(pollwatch::logging::level_for(true), tracing::Level::DEBUG);
    assert_eq!(pollwatch::logging::level_for(false), tracing::Level::WARN);
}
