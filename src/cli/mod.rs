//! Command-line parsing for the peso toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data/series code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{Casa, Period, TimeSpan};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "peso", version, about = "Argentine dollar & inflation series toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current dollar quote board.
    Rates,
    /// Convert an amount at a casa's current sell rate.
    Convert(ConvertArgs),
    /// Show aligned dollar history for one or more casas.
    History(HistoryArgs),
    /// Show the monthly inflation index grouped by year.
    Inflation(InflationArgs),
    /// Adjust a peso amount for compounded inflation between two months.
    Adjust(AdjustArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// Amount to convert (pesos by default, dollars with --reverse).
    pub amount: f64,

    /// Quote category to convert at.
    #[arg(short = 'c', long, value_enum, default_value_t = Casa::Blue)]
    pub casa: Casa,

    /// Convert dollars to pesos instead of pesos to dollars.
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct HistoryArgs {
    /// Quote categories to chart (repeatable).
    #[arg(short = 'c', long = "casa", value_enum, default_values_t = [Casa::Blue])]
    pub casas: Vec<Casa>,

    /// Display span ending at --end.
    #[arg(short = 's', long, value_enum, default_value_t = TimeSpan::ThreeMonths)]
    pub span: TimeSpan,

    /// Last day of the window (defaults to today).
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Export the chart-ready result to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export the aligned history to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct InflationArgs {
    /// Also list the individual months inside each year.
    #[arg(long)]
    pub months: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct AdjustArgs {
    /// Peso amount to adjust.
    pub amount: f64,

    /// Start month (YYYY-MM). Defaults to twelve months before the end.
    #[arg(long = "from")]
    pub from: Option<Period>,

    /// End month (YYYY-MM). Defaults to the newest usable month.
    #[arg(long = "to")]
    pub to: Option<Period>,
}
