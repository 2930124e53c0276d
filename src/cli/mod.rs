//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tradelog application using `clap`.
//! The CLI supports subcommands for recording, amending, closing, and
//! deleting trades, listing the journal, and viewing performance statistics.

pub mod output;
pub mod stats;
pub mod trades;

use clap::{Parser, Subcommand, ValueEnum};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::app::App;
use crate::config::Config;
use crate::domain::{Direction, TradeStatus, ValidationError};
use crate::error::Result;

/// Crypto trading journal with realized P/L tracking
#[derive(Parser, Debug)]
#[command(name = "tradelog")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "tradelog.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the tradelog CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new trade
    Add(AddArgs),

    /// List journaled trades
    List(ListArgs),

    /// Amend fields on an existing trade
    Edit(EditArgs),

    /// Close an open trade at an exit price
    Close(CloseArgs),

    /// Delete a trade
    Rm(RmArgs),

    /// Show performance statistics
    Stats,
}

/// Position direction accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DirectionArg {
    Long,
    Short,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Long => Self::Long,
            DirectionArg::Short => Self::Short,
        }
    }
}

/// Trade status accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Open,
    Closed,
    Cancelled,
}

impl From<StatusArg> for TradeStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Open => Self::Open,
            StatusArg::Closed => Self::Closed,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Coin symbol, e.g. BTC
    #[arg(long)]
    pub coin: String,

    /// Position direction
    #[arg(long, value_enum, default_value = "long")]
    pub direction: DirectionArg,

    /// Entry price
    #[arg(long)]
    pub entry: Decimal,

    /// Position size
    #[arg(long)]
    pub quantity: Decimal,

    /// Exit price (for trades recorded after the fact)
    #[arg(long)]
    pub exit: Option<Decimal>,

    /// Trade status
    #[arg(long, value_enum, default_value = "open")]
    pub status: StatusArg,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Entry date (YYYY-MM-DD or RFC 3339; defaults to now)
    #[arg(long)]
    pub date: Option<String>,

    /// Exit date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub exit_date: Option<String>,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show trades whose coin contains this term (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for the `edit` subcommand. Absent flags leave fields unchanged.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Trade ID (or unique prefix)
    pub id: String,

    /// Coin symbol
    #[arg(long)]
    pub coin: Option<String>,

    /// Position direction
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Entry price
    #[arg(long)]
    pub entry: Option<Decimal>,

    /// Exit price
    #[arg(long)]
    pub exit: Option<Decimal>,

    /// Position size
    #[arg(long)]
    pub quantity: Option<Decimal>,

    /// Trade status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Entry date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub date: Option<String>,

    /// Exit date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub exit_date: Option<String>,
}

/// Arguments for the `close` subcommand.
#[derive(Parser, Debug)]
pub struct CloseArgs {
    /// Trade ID (or unique prefix)
    pub id: String,

    /// Exit price
    #[arg(long)]
    pub exit: Decimal,

    /// Exit date (YYYY-MM-DD or RFC 3339; defaults to now)
    #[arg(long)]
    pub exit_date: Option<String>,
}

/// Arguments for the `rm` subcommand.
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Trade ID (or unique prefix)
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Parse a date argument as either YYYY-MM-DD (midnight UTC) or RFC 3339.
pub(crate) fn parse_date_arg(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError {
        field,
        reason: format!("{value:?} is not a valid date"),
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Dispatch a parsed command against an opened application.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let app = App::open(config).await?;

    match cli.command {
        Commands::Add(args) => trades::add(&app, args).await,
        Commands::List(args) => trades::list(&app, args).await,
        Commands::Edit(args) => trades::edit(&app, args).await,
        Commands::Close(args) => trades::close(&app, args).await,
        Commands::Rm(args) => trades::rm(&app, args).await,
        Commands::Stats => stats::show(&app).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parse_date_arg_accepts_plain_dates() {
        let dt = parse_date_arg("entry_date", "2024-01-15").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T00:00:00+00:00");
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn parse_date_arg_accepts_rfc3339() {
        let dt = parse_date_arg("entry_date", "2024-01-15T09:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-01-15T07:30:00+00:00");
    }

    #[test]
    fn parse_date_arg_reports_the_field() {
        let err = parse_date_arg("exit_date", "yesterday").unwrap_err();
        let crate::error::Error::Validation(v) = err else {
            panic!("expected validation error");
        };
        assert_eq!(v.field, "exit_date");
    }

    #[test]
    fn cli_parses_add_command() {
        let cli = Cli::try_parse_from([
            "tradelog", "add", "--coin", "BTC", "--entry", "42000", "--quantity", "0.5",
            "--exit", "45000", "--status", "closed", "--date", "2024-01-15",
        ])
        .unwrap();

        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.coin, "BTC");
        assert!(matches!(args.status, StatusArg::Closed));
        assert_eq!(args.exit, Some("45000".parse().unwrap()));
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["tradelog", "stats", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats));
    }
}
