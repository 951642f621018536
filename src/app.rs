//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - loads settings from the environment
//! - dispatches `list` / `fetch` and prints or exports the result

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, FetchArgs, OutputFormat};
use crate::config::{LOG_ENV, Settings};
use crate::error::AppError;
use crate::provider::{FetchOutput, Provider};

pub mod pipeline;

/// Entry point for the `eia` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::from_env().with_overrides(cli.api_key, cli.api_base);

    match cli.command {
        Command::List => {
            print!("{}", crate::report::format_routes(&Provider::eia()));
            Ok(())
        }
        Command::Fetch(args) => handle_fetch(&settings, args),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("eia_gas=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_fetch(settings: &Settings, args: FetchArgs) -> Result<(), AppError> {
    args.check_output()?;
    let output = pipeline::run_fetch(settings, &args.target, args.raw_args())?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    write_fetch(&args, &output, &mut stdout.lock(), &mut stderr.lock())
}

/// Present a fetch result.
///
/// Diagnostics are not written here: the pipeline already surfaced them as
/// `warn` events.
fn write_fetch(
    args: &FetchArgs,
    output: &FetchOutput,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<(), AppError> {
    let to_stdout = |e: std::io::Error| AppError::io("failed to write", "<stdout>", e);

    match (args.format, &args.output) {
        (OutputFormat::Table, None) => {
            write!(
                stdout,
                "{}{}",
                crate::report::format_fetch_summary(output),
                crate::report::format_records(&output.records)
            )
            .map_err(to_stdout)?;
        }
        (OutputFormat::Json, None) => {
            serde_json::to_writer_pretty(&mut *stdout, output)?;
            writeln!(stdout).map_err(to_stdout)?;
        }
        (OutputFormat::Csv, None) => {
            crate::io::write_csv(&mut *stdout, &output.records).map_err(to_stdout)?;
        }
        (OutputFormat::Csv, Some(path)) => crate::io::write_records_csv(path, &output.records)?,
        (OutputFormat::Json, Some(path)) => crate::io::write_output_json(path, output)?,
        (OutputFormat::Table, Some(_)) => args.check_output()?,
    }

    if let Some(path) = &args.output {
        writeln!(stderr, "Wrote {} rows to {}", output.records.len(), path.display())
            .map_err(|e| AppError::io("failed to write", "<stderr>", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::diagnostics::{Diagnostic, DiagnosticKind};

    fn fetch_args(argv: &[&str]) -> FetchArgs {
        let mut full = vec!["eia", "fetch", "PriceFutures"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::Fetch(args) => args,
            Command::List => panic!("expected fetch"),
        }
    }

    fn output() -> FetchOutput {
        FetchOutput {
            model: "PriceFutures",
            records: serde_json::from_value(json!([{"period": "2020", "value": 2.5}])).unwrap(),
            total: Some(7),
            diagnostics: vec![Diagnostic::new(
                DiagnosticKind::IncompleteReturn,
                "incomplete return : capped. Total rows available: 7.",
            )],
        }
    }

    fn render(args: &FetchArgs) -> Result<(String, String), AppError> {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        write_fetch(args, &output(), &mut out, &mut err)?;
        Ok((String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap()))
    }

    #[test]
    fn table_mode_leaves_diagnostics_to_the_log() {
        let (out, err) = render(&fetch_args(&[])).unwrap();
        assert!(out.contains("Rows: 1 of 7 available"));
        assert!(!out.contains("incomplete return"));
        assert!(err.is_empty());
    }

    #[test]
    fn json_mode_carries_diagnostics_in_the_body() {
        let (out, err) = render(&fetch_args(&["--format", "json"])).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["diagnostics"][0]["kind"], "incomplete_return");
        assert!(err.is_empty());
    }

    #[test]
    fn file_output_reports_the_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let path_arg = path.to_str().unwrap();
        let (out, err) = render(&fetch_args(&["--format", "csv", "-o", path_arg])).unwrap();
        assert!(out.is_empty());
        assert_eq!(err, format!("Wrote 1 rows to {}\n", path.display()));
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("period,area"));
    }

    #[test]
    fn table_to_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let err = render(&fetch_args(&["-o", path.to_str().unwrap()])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!path.exists());
    }
}
