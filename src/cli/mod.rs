//! Command-line parsing for the EIA natural-gas client.
//!
//! Parsing stays separate from dispatch (`crate::app`) and from the fetch code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::Frequency;
use crate::error::AppError;
use crate::query::RawArgs;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "eia", version, about = "EIA natural gas statistics")]
pub struct Cli {
    /// Log debug output (overrides EIA_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// EIA API key (defaults to EIA_API_KEY).
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Base URL of the EIA API (defaults to EIA_API_BASE or https://api.eia.gov).
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every command path and the model it serves.
    List,
    /// Fetch one dataset by command path (natural_gas/price/futures) or model id (PriceFutures).
    Fetch(FetchArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Command path or model id.
    pub target: String,

    /// Frequency of the data. Annual-only datasets downgrade monthly requests.
    #[arg(long, value_enum)]
    pub frequency: Option<Frequency>,

    /// Start period: YYYY for annual data, YYYY-MM for monthly data.
    #[arg(long, value_name = "PERIOD")]
    pub start: Option<String>,

    /// End period: YYYY for annual data, YYYY-MM for monthly data.
    #[arg(long, value_name = "PERIOD")]
    pub end: Option<String>,

    /// Comma separated area codes, e.g. SCA,STX.
    #[arg(long, value_name = "CODES")]
    pub area: Option<String>,

    /// Consumption process code (VCS, VDV, VRS, VGT, VEU, VIN, VGP, VGL; labels in `eia list`).
    #[arg(long, value_name = "CODE")]
    pub process: Option<String>,

    /// Comma separated series ids.
    #[arg(long, value_name = "IDS")]
    pub series: Option<String>,

    /// Maximum number of rows (5000 max).
    #[arg(long)]
    pub limit: Option<String>,

    /// Rows to skip; combine with --limit to page.
    #[arg(long)]
    pub offset: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout. Needs --format json or csv.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FetchArgs {
    /// A table only goes to the terminal.
    pub fn check_output(&self) -> Result<(), AppError> {
        match (self.format, &self.output) {
            (OutputFormat::Table, Some(path)) => Err(AppError::validation(format!(
                "--output {} needs --format json or csv",
                path.display()
            ))),
            _ => Ok(()),
        }
    }

    /// Query arguments as a provider expects them; validation happens later.
    pub fn raw_args(&self) -> RawArgs {
        let fields = [
            ("frequency", self.frequency.map(|f| f.to_string())),
            ("start_date", self.start.clone()),
            ("end_date", self.end.clone()),
            ("filter_by_area", self.area.clone()),
            ("filter_by_process", self.process.clone()),
            ("filter_by_series", self.series.clone()),
            ("limit", self.limit.clone()),
            ("offset", self.offset.clone()),
        ];
        fields
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_flags_become_raw_args() {
        let cli = Cli::parse_from([
            "eia", "fetch", "natural_gas/consumption/end_use", "--frequency", "monthly", "--area", "SCA,STX",
            "--limit", "10",
        ]);
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        let raw = args.raw_args();
        assert_eq!(raw.get("frequency"), Some("monthly"));
        assert_eq!(raw.get("filter_by_area"), Some("SCA,STX"));
        assert_eq!(raw.get("limit"), Some("10"));
        assert_eq!(raw.get("start_date"), None);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn table_output_cannot_go_to_a_file() {
        let cli = Cli::parse_from(["eia", "fetch", "PriceFutures", "-o", "out.txt"]);
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        let err = args.check_output().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let cli = Cli::parse_from(["eia", "fetch", "PriceFutures", "--format", "csv", "-o", "out.csv"]);
        let Command::Fetch(args) = cli.command else {
            panic!("expected fetch");
        };
        assert!(args.check_output().is_ok());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["eia", "list", "-v", "--api-key", "k"]);
        assert!(cli.verbose);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert!(matches!(cli.command, Command::List));
    }
}
