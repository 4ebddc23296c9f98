//! Formatted terminal output.

use crate::data::client::DollarQuote;
use crate::domain::{Adjustment, ChartReadyResult, Direction, Period, TimeSpan};
use crate::inflation::summary::YearSummary;

/// Format the current quote board.
pub fn format_quote_board(quotes: &[DollarQuote]) -> String {
    let mut out = String::new();
    out.push_str("=== peso - dollar quotes ===\n");
    out.push_str(&format!(
        "{:<20} {:>12} {:>12}  {}\n",
        "Casa", "Buy", "Sell", "Updated"
    ));

    for q in quotes {
        out.push_str(&format!(
            "{:<20} {:>12} {:>12}  {}\n",
            q.nombre,
            money_or_na(q.compra),
            money_or_na(q.venta),
            q.fecha_actualizacion.as_deref().unwrap_or("-"),
        ));
    }

    out
}

fn money_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Format a single currency conversion.
pub fn format_conversion(
    amount: f64,
    rate: f64,
    converted: f64,
    quote_name: &str,
    direction: Direction,
) -> String {
    let (from, to) = match direction {
        Direction::PesosToDollars => ("ARS", "USD"),
        Direction::DollarsToPesos => ("USD", "ARS"),
    };
    format!("{from} ${amount:.2} = {to} ${converted:.2}  ({quote_name} at ${rate:.2})\n")
}

/// Format an aligned, downsampled history as a table: one row per label,
/// one column per series.
pub fn format_history_table(chart: &ChartReadyResult, span: TimeSpan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== peso - dollar history ({}) ===\n",
        span.display_name()
    ));

    out.push_str(&format!("{:<8}", "Date"));
    for s in &chart.series {
        out.push_str(&format!(" {:>18}", s.name));
    }
    out.push('\n');

    for (i, label) in chart.labels.iter().enumerate() {
        out.push_str(&format!("{label:<8}"));
        for s in &chart.series {
            match s.values[i] {
                Some(v) => out.push_str(&format!(" {:>18}", format!("{v:.2}"))),
                None => out.push_str(&format!(" {:>18}", "-")),
            }
        }
        out.push('\n');
    }

    if chart.labels.is_empty() {
        out.push_str("No data available for the selected range.\n");
    }

    out
}

/// Format the per-year inflation summary, newest year first.
pub fn format_yearly_summary(years: &[YearSummary], show_months: bool) -> String {
    let mut out = String::new();
    out.push_str("=== peso - monthly inflation index ===\n");

    for year in years.iter().rev() {
        out.push_str(&format!(
            "{}  min {:.1}% | max {:.1}% | average {:.1}%\n",
            year.year, year.min, year.max, year.mean
        ));
        if show_months {
            for &(month, rate) in year.months.iter().rev() {
                out.push_str(&format!("  {:>7}  {rate:.1}%\n", format!("{}-{month:02}", year.year)));
            }
        }
    }

    if years.is_empty() {
        out.push_str("No inflation data available.\n");
    }

    out
}

/// Format a compounded adjustment as the calculator sentence.
pub fn format_adjustment(
    principal: f64,
    start: Period,
    end: Period,
    result: &Adjustment,
) -> String {
    format!(
        "${principal:.2} in {start} is approximately equivalent to ${:.2} in {end}.\n\
         That is a total increase of {:.2}%, an average of {:.2}% per month \
         ({:.2}% annualized).\n",
        result.adjusted_amount,
        result.total_change_percent,
        result.average_monthly_percent,
        result.annualized_percent,
    )
}
