//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between the fetch layer and the alignment core
//! - exported to JSON/CSV
//! - handed to a rendering layer as plain parallel arrays

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A dollar quote category ("casa" in the provider's API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Casa {
    Oficial,
    Blue,
    Bolsa,
    #[value(name = "contadoconliqui", alias = "ccl")]
    ContadoConLiqui,
    Mayorista,
    Cripto,
    Solidario,
    Turista,
    Tarjeta,
}

impl Casa {
    pub const ALL: [Casa; 9] = [
        Casa::Oficial,
        Casa::Blue,
        Casa::Bolsa,
        Casa::ContadoConLiqui,
        Casa::Mayorista,
        Casa::Cripto,
        Casa::Solidario,
        Casa::Turista,
        Casa::Tarjeta,
    ];

    /// Path segment used by the provider's REST endpoints.
    pub fn slug(self) -> &'static str {
        match self {
            Casa::Oficial => "oficial",
            Casa::Blue => "blue",
            Casa::Bolsa => "bolsa",
            Casa::ContadoConLiqui => "contadoconliqui",
            Casa::Mayorista => "mayorista",
            Casa::Cripto => "cripto",
            Casa::Solidario => "solidario",
            Casa::Turista => "turista",
            Casa::Tarjeta => "tarjeta",
        }
    }

    /// Human-readable label for terminal output and chart legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Casa::Oficial => "Oficial",
            Casa::Blue => "Blue",
            Casa::Bolsa => "Bolsa",
            Casa::ContadoConLiqui => "Contado con Liqui",
            Casa::Mayorista => "Mayorista",
            Casa::Cripto => "Cripto",
            Casa::Solidario => "Solidario",
            Casa::Turista => "Turista",
            Casa::Tarjeta => "Tarjeta",
        }
    }
}

impl fmt::Display for Casa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single dated observation as returned by the source.
///
/// Absent days simply do not appear in a series; there are no explicit
/// absent entries at this level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

/// A named, ascending-by-date sequence of observations.
///
/// Dates need not be contiguous nor aligned with any other series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Observation>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// A series with no observations (e.g. a degraded failed fetch).
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// One series' values re-indexed onto a shared date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedValues {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// N series merged onto the sorted union of their observed dates.
///
/// Invariant: `dates.len() == series[i].values.len()` for every `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeriesSet {
    pub dates: Vec<NaiveDate>,
    pub series: Vec<AlignedValues>,
}

/// A calendar year-month, ordered chronologically.
///
/// Plain integers rather than a timezone-sensitive date object, so a period
/// parsed from `"2023-05"` can never drift a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parse `"YYYY-MM"`, tolerating a trailing `-DD` (the inflation feed
    /// stamps each month as its first day).
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        Self::new(year, month)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The period `n` months earlier.
    pub fn months_before(self, n: u32) -> Self {
        let total = self.year * 12 + self.month as i32 - 1 - n as i32;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32 + 1,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s).ok_or_else(|| {
            CoreError::Parse(format!("Invalid period '{s}' (expected YYYY-MM)."))
        })
    }
}

/// A monthly percentage change of the price index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateObservation {
    pub period: Period,
    pub rate: f64,
}

/// Requested display span for a historical chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSpan {
    #[value(name = "1w")]
    Week,
    #[value(name = "1m")]
    Month,
    #[value(name = "3m")]
    ThreeMonths,
    #[value(name = "6m")]
    SixMonths,
    #[value(name = "1y")]
    Year,
    All,
}

impl TimeSpan {
    /// Display budget per span. `None` means keep every point.
    pub fn target_point_count(self) -> Option<usize> {
        match self {
            TimeSpan::Week => None,
            TimeSpan::Month => Some(30),
            TimeSpan::ThreeMonths => Some(90),
            TimeSpan::SixMonths => Some(180),
            TimeSpan::Year => Some(365),
            TimeSpan::All => Some(1000),
        }
    }

    /// First day of the window ending at `end`, or `None` for full history.
    pub fn window_start(self, end: NaiveDate) -> Option<NaiveDate> {
        let start = match self {
            TimeSpan::Week => end - Duration::weeks(1),
            TimeSpan::Month => end.checked_sub_months(Months::new(1))?,
            TimeSpan::ThreeMonths => end.checked_sub_months(Months::new(3))?,
            TimeSpan::SixMonths => end.checked_sub_months(Months::new(6))?,
            TimeSpan::Year => end.checked_sub_months(Months::new(12))?,
            TimeSpan::All => return None,
        };
        Some(start)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TimeSpan::Week => "1 week",
            TimeSpan::Month => "1 month",
            TimeSpan::ThreeMonths => "3 months",
            TimeSpan::SixMonths => "6 months",
            TimeSpan::Year => "1 year",
            TimeSpan::All => "full history",
        }
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeSpan::Week => "1w",
            TimeSpan::Month => "1m",
            TimeSpan::ThreeMonths => "3m",
            TimeSpan::SixMonths => "6m",
            TimeSpan::Year => "1y",
            TimeSpan::All => "all",
        };
        f.write_str(name)
    }
}

/// Visual density knobs chosen per span.
///
/// A deterministic table: long spans drop the point markers entirely and
/// cap the axis tick count, short spans keep visible markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanStyle {
    /// Point marker radius in display units; 0 disables markers.
    pub marker_radius: f32,
    /// Upper bound on rendered axis ticks.
    pub max_ticks: usize,
}

impl SpanStyle {
    pub fn for_span(span: TimeSpan) -> Self {
        match span {
            TimeSpan::Week => SpanStyle { marker_radius: 3.0, max_ticks: 7 },
            TimeSpan::Month => SpanStyle { marker_radius: 2.5, max_ticks: 10 },
            TimeSpan::ThreeMonths => SpanStyle { marker_radius: 2.0, max_ticks: 12 },
            TimeSpan::SixMonths => SpanStyle { marker_radius: 1.5, max_ticks: 12 },
            TimeSpan::Year => SpanStyle { marker_radius: 0.0, max_ticks: 12 },
            TimeSpan::All => SpanStyle { marker_radius: 0.0, max_ticks: 16 },
        }
    }
}

/// One named value array of a chart-ready result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// The only structure exposed across the core/rendering boundary.
///
/// Invariant: every `series[i].values` has the same length as `labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReadyResult {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Conversion direction for the currency converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PesosToDollars,
    DollarsToPesos,
}

impl Direction {
    /// Convert `amount` at the quoted sell `rate`.
    pub fn apply(self, amount: f64, rate: f64) -> f64 {
        match self {
            Direction::PesosToDollars => amount / rate,
            Direction::DollarsToPesos => amount * rate,
        }
    }
}

/// Output of the compounded-rate calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub adjusted_amount: f64,
    pub total_change_percent: f64,
    pub average_monthly_percent: f64,
    pub annualized_percent: f64,
}
