//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the API client
//! - runs the selected pipeline
//! - prints reports and writes optional exports

use chrono::Local;
use clap::Parser;

use crate::cli::{AdjustArgs, Command, ConvertArgs, HistoryArgs, InflationArgs};
use crate::data::client::DatosClient;
use crate::domain::Direction;
use crate::error::{CoreError, Result};
use crate::inflation::{adjust, default_bounds, yearly_summary};

pub mod pipeline;

/// Entry point for the `peso` binary.
pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // We want bare `peso` to behave like `peso rates`. Clap requires a
    // subcommand name, so rewrite the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Rates => handle_rates(),
        Command::Convert(args) => handle_convert(args),
        Command::History(args) => handle_history(args),
        Command::Inflation(args) => handle_inflation(args),
        Command::Adjust(args) => handle_adjust(args),
    }
}

fn handle_rates() -> Result<()> {
    let client = DatosClient::from_env()?;
    let quotes = client.fetch_quotes()?;
    print!("{}", crate::report::format_quote_board(&quotes));
    Ok(())
}

fn handle_convert(args: ConvertArgs) -> Result<()> {
    let client = DatosClient::from_env()?;
    let quotes = client.fetch_quotes()?;

    let quote = quotes
        .iter()
        .find(|q| q.casa == args.casa.slug())
        .ok_or_else(|| CoreError::Fetch {
            name: args.casa.to_string(),
            reason: "not present on the quote board".to_string(),
        })?;
    let rate = quote.venta.ok_or_else(|| CoreError::Fetch {
        name: args.casa.to_string(),
        reason: "no sell quote available".to_string(),
    })?;

    let direction = if args.reverse {
        Direction::DollarsToPesos
    } else {
        Direction::PesosToDollars
    };
    let converted = direction.apply(args.amount, rate);

    print!(
        "{}",
        crate::report::format_conversion(args.amount, rate, converted, &quote.nombre, direction)
    );
    Ok(())
}

fn handle_history(args: HistoryArgs) -> Result<()> {
    let client = DatosClient::from_env()?;

    let request = pipeline::HistoryRequest {
        casas: args.casas,
        span: args.span,
        end: args.end.unwrap_or_else(|| Local::now().date_naive()),
    };
    let view = pipeline::run_history(&client, &request)?;

    print!(
        "{}",
        crate::report::format_history_table(&view.chart, request.span)
    );

    if let Some(path) = &args.export {
        crate::io::export::write_chart_json(path, &view.chart)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::export::write_history_csv(path, &view.aligned)?;
    }

    Ok(())
}

fn handle_inflation(args: InflationArgs) -> Result<()> {
    let client = DatosClient::from_env()?;
    let rates = client.fetch_inflation()?;
    let years = yearly_summary(&rates);
    print!(
        "{}",
        crate::report::format_yearly_summary(&years, args.months)
    );
    Ok(())
}

fn handle_adjust(args: AdjustArgs) -> Result<()> {
    let client = DatosClient::from_env()?;
    let rates = client.fetch_inflation()?;

    let (fallback_start, fallback_end) = default_bounds(&rates).ok_or_else(|| {
        CoreError::Parse("Inflation feed returned no observations.".to_string())
    })?;
    let end = args.to.unwrap_or(fallback_end);
    let start = match args.from {
        Some(period) => period,
        None if args.to.is_none() => fallback_start,
        None => end.months_before(12),
    };

    let result = adjust(&rates, start, end, args.amount)?;
    print!(
        "{}",
        crate::report::format_adjustment(args.amount, start, end, &result)
    );
    Ok(())
}

/// Rewrite argv so `peso` defaults to `peso rates`.
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("rates".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    argv
}
