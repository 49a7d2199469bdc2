//! CLI entry point for vercheck.
//!
//! Thin wrapper over [`vercheck::version`]: parses arguments, resolves the
//! running version, prints the verdict, and maps it onto the exit-code
//! contract (2 = acceptable, 1 = insufficient, 3 = internal error).
//!
//! # Doc Audit
//! - audited: 2026-08-30
//! - docs: README.md
//! - ignore: false

use anyhow::{anyhow, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use vercheck::version::{compare, Verdict};

/// Environment variable consulted when `--running-version` is not given.
const RUNNING_VERSION_VAR: &str = "VERCHECK_RUNNING_VERSION";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GIT_SHA"),
    "\nbuilt: ",
    env!("BUILD_DATE"),
);

#[derive(Parser)]
#[command(name = "vercheck")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Check a runtime version against a required minimum", long_about = None)]
#[command(
    after_help = "EXIT CODES:\n    2    running version acceptable\n    1    running version insufficient\n    3    internal error (malformed version, missing running version)\n\nThe 1/2 polarity is inherited from the launcher scripts this tool gates;\nit inverts the usual POSIX convention on purpose."
)]
struct Cli {
    /// Minimum version required, components separated by `.` or `_`
    #[arg(value_name = "MINIMUM", default_value = "1.4")]
    minimum_version: String,

    /// Name used in the failure message
    #[arg(value_name = "PROGRAM", default_value = "this program")]
    program_name: String,

    /// Version under test; defaults to $VERCHECK_RUNNING_VERSION
    #[arg(long, value_name = "VERSION")]
    running_version: Option<String>,
}

fn main() {
    // clap exits 2 on usage errors, which collides with the "acceptable"
    // verdict code; remap usage errors to the internal-error code so a
    // status-gated launcher never mistakes a typo for a passing check.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(3),
            }
        }
    };

    match run(&cli) {
        Ok(Verdict::Acceptable) => std::process::exit(2),
        Ok(Verdict::Insufficient) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(3);
        }
    }
}

fn run(cli: &Cli) -> Result<Verdict> {
    let running = resolve_running_version(cli.running_version.as_deref())?;

    println!();
    println!("Checking for a compatible runtime version...");
    println!("Looking for minimum version: {}", cli.minimum_version.bold());

    let verdict = compare(&cli.minimum_version, &running)
        .context("cannot compare version strings")?;

    match verdict {
        Verdict::Acceptable => {
            println!(
                "{} Found compatible version {}",
                "✓".green(),
                running.bold()
            );
        }
        Verdict::Insufficient => {
            println!(
                "{} The current version {} is insufficient to run {}",
                "✗".red(),
                running.bold(),
                cli.program_name
            );
        }
    }

    Ok(verdict)
}

/// Resolve the version under test: the flag wins, then the environment.
fn resolve_running_version(flag: Option<&str>) -> Result<String> {
    if let Some(version) = flag {
        return Ok(version.to_string());
    }

    std::env::var(RUNNING_VERSION_VAR).map_err(|_| {
        anyhow!(
            "no running version supplied: pass --running-version or set {}",
            RUNNING_VERSION_VAR
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_flag_wins_over_environment() {
        std::env::set_var(RUNNING_VERSION_VAR, "9.9");
        let resolved = resolve_running_version(Some("1.5.0_10")).unwrap();
        assert_eq!(resolved, "1.5.0_10");
        std::env::remove_var(RUNNING_VERSION_VAR);
    }

    #[test]
    #[serial]
    fn test_environment_fallback() {
        std::env::set_var(RUNNING_VERSION_VAR, "1.5.0_10");
        let resolved = resolve_running_version(None).unwrap();
        assert_eq!(resolved, "1.5.0_10");
        std::env::remove_var(RUNNING_VERSION_VAR);
    }

    #[test]
    #[serial]
    fn test_missing_running_version_is_an_error() {
        std::env::remove_var(RUNNING_VERSION_VAR);
        let err = resolve_running_version(None).unwrap_err();
        assert!(err.to_string().contains(RUNNING_VERSION_VAR));
    }

    #[test]
    fn test_run_reports_parse_errors_with_context() {
        let cli = Cli {
            minimum_version: "1.x".to_string(),
            program_name: "this program".to_string(),
            running_version: Some("1.5".to_string()),
        };
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("`x`"));
    }
}
