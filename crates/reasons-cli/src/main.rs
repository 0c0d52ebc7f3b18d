use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reasons_core::{Family, REGISTRY, UnscheduledReason};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "reasons")]
#[command(about = "Inspect Cook failure reason codes and placement messages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every registered reason as NAME<TAB>VALUE
    List {
        /// Only print one family
        #[arg(short, long, value_enum)]
        family: Option<FamilyArg>,
    },

    /// Print the value bound to a symbolic name
    Get {
        /// Symbolic name, e.g. MAX_RUNTIME_EXCEEDED
        name: String,
    },

    /// Report which placement messages appear in scheduler output
    Scan {
        /// Text to scan (reads stdin when omitted)
        text: Option<String>,
    },

    /// Print the upstream owner of each family
    Upstream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FamilyArg {
    Code,
    Message,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Code => Family::FailureCode,
            FamilyArg::Message => Family::PlacementMessage,
        }
    }
}

/// Used when `RUST_LOG` is unset. The target is the binary's crate name.
const DEFAULT_LOG_FILTER: &str = "reasons=info";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse(), &mut std::io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one command. `Ok(false)` means the command ran but found nothing.
fn run(cli: Cli, out: &mut impl Write) -> Result<bool> {
    match cli.command {
        Commands::List { family } => {
            let entries = REGISTRY
                .entries()
                .iter()
                .filter(|e| family.is_none_or(|f| e.family() == Family::from(f)));
            for entry in entries {
                writeln!(out, "{}\t{}", entry.name, entry.value)?;
            }
            Ok(true)
        }
        Commands::Get { name } => {
            tracing::debug!(%name, "looking up reason");
            let value = REGISTRY.lookup(&name)?;
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Commands::Scan { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let found = UnscheduledReason::find_in(&text);
            tracing::debug!(bytes = text.len(), found = found.len(), "scanned input");
            if found.is_empty() {
                tracing::info!("no placement message found");
                return Ok(false);
            }
            for reason in found {
                writeln!(out, "{}", reason.name())?;
            }
            Ok(true)
        }
        Commands::Upstream => {
            for family in Family::ALL {
                writeln!(out, "{family}\t{}", family.upstream())?;
            }
            Ok(true)
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read scheduler output from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasons_core::{COULD_NOT_PLACE_JOB, UNDER_INVESTIGATION};

    fn run_args(args: &[&str]) -> (Result<bool>, String) {
        let cli = Cli::try_parse_from(std::iter::once("reasons").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_list_with_family_filter() {
        let cli = Cli::try_parse_from(["reasons", "list", "--family", "code"]).unwrap();
        match cli.command {
            Commands::List { family } => assert_eq!(family, Some(FamilyArg::Code)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_family() {
        assert!(Cli::try_parse_from(["reasons", "list", "--family", "host"]).is_err());
    }

    #[test]
    fn get_requires_a_name() {
        assert!(Cli::try_parse_from(["reasons", "get"]).is_err());
    }

    #[test]
    fn scan_text_is_optional() {
        let cli = Cli::try_parse_from(["reasons", "scan"]).unwrap();
        assert!(matches!(cli.command, Commands::Scan { text: None }));
    }

    #[test]
    fn get_unknown_name_fails() {
        let (result, out) = run_args(&["get", "NOPE"]);
        assert_eq!(result.unwrap_err().to_string(), "unknown reason name: NOPE");
        assert!(out.is_empty());
    }

    #[test]
    fn get_prints_the_bound_value() {
        let (result, out) = run_args(&["get", "EXECUTOR_UNREGISTERED"]);
        assert!(result.unwrap());
        assert_eq!(out, "6002\n");

        let (_, out) = run_args(&["get", "UNDER_INVESTIGATION"]);
        assert_eq!(out, format!("{UNDER_INVESTIGATION}\n"));
    }

    #[test]
    fn list_prints_name_tab_value_lines() {
        let (result, out) = run_args(&["list"]);
        assert!(result.unwrap());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), REGISTRY.len());
        assert_eq!(lines[0], "MAX_RUNTIME_EXCEEDED\t2003");
        assert_eq!(lines[1], "EXECUTOR_UNREGISTERED\t6002");
        assert_eq!(lines[2], "CMD_NON_ZERO_EXIT\t99003");
    }

    #[test]
    fn list_filters_by_family() {
        let (_, out) = run_args(&["list", "--family", "message"]);
        assert_eq!(
            out,
            format!(
                "UNDER_INVESTIGATION\t{UNDER_INVESTIGATION}\nCOULD_NOT_PLACE_JOB\t{COULD_NOT_PLACE_JOB}\n"
            )
        );

        let (_, out) = run_args(&["list", "-f", "code"]);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| !l.contains("The job")));
    }

    #[test]
    fn scan_prints_every_found_name() {
        let text = format!("{COULD_NOT_PLACE_JOB} / {UNDER_INVESTIGATION}");
        let (result, out) = run_args(&["scan", text.as_str()]);
        assert!(result.unwrap());
        assert_eq!(out, "UNDER_INVESTIGATION\nCOULD_NOT_PLACE_JOB\n");
    }

    #[test]
    fn scan_without_a_message_fails() {
        let (result, out) = run_args(&["scan", "all good"]);
        assert!(!result.unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn upstream_prints_one_line_per_family() {
        let (result, out) = run_args(&["upstream"]);
        assert!(result.unwrap());
        assert_eq!(
            out,
            "failure code\tCook/Mesos (scheduler/src/cook/mesos/schema.clj)\n\
             placement message\tCook/Fenzo\n"
        );
    }

    #[test]
    fn default_log_filter_targets_this_binary() {
        let target = DEFAULT_LOG_FILTER.split('=').next().unwrap();
        let crate_name = module_path!().split("::").next().unwrap();
        assert_eq!(target, crate_name);
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn family_arg_maps_to_family() {
        assert_eq!(Family::from(FamilyArg::Message), Family::PlacementMessage);
    }
}
