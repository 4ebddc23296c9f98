//! REST client for the public dollar-quote and inflation endpoints.
//!
//! Three feeds:
//!
//! - current quote board (`/v1/dolares` on the quotes host)
//! - per-casa daily history (`/v1/cotizaciones/dolares/{casa}`)
//! - monthly inflation index (`/v1/finanzas/indices/inflacion`)
//!
//! The contract is a single attempt per fetch: no retries. Every response
//! body passes through the injected [`ResponseCache`] so repeated
//! selections within the TTL do not re-hit the provider.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::cache::ResponseCache;
use crate::domain::{Casa, Observation, Period, RateObservation, Series};
use crate::error::{CoreError, Result};
use crate::series::range::DateRange;

const DATOS_BASE_URL: &str = "https://api.argentinadatos.com/v1";
const QUOTES_BASE_URL: &str = "https://dolarapi.com/v1";

// Defensive only; the provider contract specifies no timeout behavior.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Current board entry for one casa.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DollarQuote {
    pub casa: String,
    pub nombre: String,
    pub compra: Option<f64>,
    pub venta: Option<f64>,
    #[serde(default)]
    pub fecha_actualizacion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryRecord {
    fecha: String,
    venta: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct InflationRecord {
    fecha: String,
    valor: f64,
}

pub struct DatosClient {
    http: Client,
    datos_url: String,
    quotes_url: String,
    cache: ResponseCache,
}

impl DatosClient {
    /// Build a client from the environment.
    ///
    /// `PESO_DATOS_URL` and `PESO_QUOTES_URL` override the production hosts
    /// (handy for pointing at a local stub).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let datos_url =
            std::env::var("PESO_DATOS_URL").unwrap_or_else(|_| DATOS_BASE_URL.to_string());
        let quotes_url =
            std::env::var("PESO_QUOTES_URL").unwrap_or_else(|_| QUOTES_BASE_URL.to_string());
        Self::new(datos_url, quotes_url, ResponseCache::default())
    }

    pub fn new(
        datos_url: impl Into<String>,
        quotes_url: impl Into<String>,
        cache: ResponseCache,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            datos_url: datos_url.into(),
            quotes_url: quotes_url.into(),
            cache,
        })
    }

    /// Current quote board across all casas.
    pub fn fetch_quotes(&self) -> Result<Vec<DollarQuote>> {
        let url = format!("{}/dolares", self.quotes_url);
        let body = self.get_cached(&url, "quotes")?;
        let quotes: Vec<DollarQuote> = serde_json::from_str(&body)
            .map_err(|e| CoreError::Parse(format!("Invalid quote board payload: {e}")))?;
        Ok(quotes)
    }

    /// Daily sell-price history for one casa, optionally clipped to `range`.
    ///
    /// Days without a trade simply do not appear; records with a null or
    /// non-finite sell leg are dropped the same way.
    pub fn fetch_series(&self, casa: Casa, range: Option<&DateRange>) -> Result<Series> {
        let url = format!("{}/cotizaciones/dolares/{}", self.datos_url, casa.slug());
        let body = self.get_cached(&url, casa.slug())?;
        parse_history(&body, casa, range)
    }

    /// Monthly inflation index, ascending by period.
    pub fn fetch_inflation(&self) -> Result<Vec<RateObservation>> {
        let url = format!("{}/finanzas/indices/inflacion", self.datos_url);
        let body = self.get_cached(&url, "inflacion")?;
        parse_inflation(&body)
    }

    fn get_cached(&self, url: &str, name: &str) -> Result<String> {
        if let Some(body) = self.cache.get(url) {
            log::debug!("{name}: served from cache");
            return Ok(body);
        }

        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|e| CoreError::Fetch {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(CoreError::Fetch {
                name: name.to_string(),
                reason: format!("status {}", resp.status()),
            });
        }

        let body = resp.text().map_err(|e| CoreError::Fetch {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        self.cache.put(url, &body);
        log::debug!("{name}: served from API");
        Ok(body)
    }
}

fn parse_history(body: &str, casa: Casa, range: Option<&DateRange>) -> Result<Series> {
    let records: Vec<HistoryRecord> = serde_json::from_str(body)
        .map_err(|e| CoreError::Parse(format!("Invalid history payload for {casa}: {e}")))?;

    let mut points = Vec::with_capacity(records.len());
    for rec in records {
        let Some(value) = rec.venta.filter(|v| v.is_finite()) else {
            continue;
        };
        let date = parse_day(&rec.fecha)?;
        if range.is_none_or(|r| r.contains(date)) {
            points.push(Observation { date, value });
        }
    }
    points.sort_by_key(|o| o.date);
    points.dedup_by_key(|o| o.date);

    Ok(Series::new(casa.display_name(), points))
}

fn parse_inflation(body: &str) -> Result<Vec<RateObservation>> {
    let records: Vec<InflationRecord> = serde_json::from_str(body)
        .map_err(|e| CoreError::Parse(format!("Invalid inflation payload: {e}")))?;

    let mut rates = Vec::with_capacity(records.len());
    for rec in records {
        if !rec.valor.is_finite() {
            continue;
        }
        let period = Period::parse(&rec.fecha)
            .ok_or_else(|| CoreError::Parse(format!("Invalid inflation date '{}'", rec.fecha)))?;
        rates.push(RateObservation {
            period,
            rate: rec.valor,
        });
    }
    rates.sort_by_key(|r| r.period);
    rates.dedup_by_key(|r| r.period);

    Ok(rates)
}

/// Build a calendar date from the feed's `"YYYY-MM-DD"` string.
///
/// The string is parsed by calendar value only; no timezone is ever
/// involved, so a date can never drift a day on render.
fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| CoreError::Parse(format!("Invalid date '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_the_quote_board_shape() {
        let body = r#"[
            {"moneda":"USD","casa":"oficial","nombre":"Oficial","compra":980.5,"venta":1020.5,"fechaActualizacion":"2024-03-15T10:00:00.000Z"},
            {"moneda":"USD","casa":"blue","nombre":"Blue","compra":null,"venta":1225.0}
        ]"#;
        let quotes: Vec<DollarQuote> = serde_json::from_str(body).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].venta, Some(1020.5));
        assert_eq!(quotes[1].compra, None);
        assert!(quotes[1].fecha_actualizacion.is_none());
    }

    #[test]
    fn history_keeps_the_sell_leg_sorted_by_date() {
        let body = r#"[
            {"casa":"blue","compra":1190.0,"venta":1210.0,"fecha":"2024-03-14"},
            {"casa":"blue","compra":1180.0,"venta":1200.0,"fecha":"2024-03-12"},
            {"casa":"blue","compra":1185.0,"venta":null,"fecha":"2024-03-13"}
        ]"#;
        let series = parse_history(body, Casa::Blue, None).unwrap();
        assert_eq!(series.name, "Blue");
        assert_eq!(
            series.points,
            vec![
                Observation { date: d(2024, 3, 12), value: 1200.0 },
                Observation { date: d(2024, 3, 14), value: 1210.0 },
            ]
        );
    }

    #[test]
    fn history_clips_to_the_requested_range() {
        let body = r#"[
            {"casa":"blue","venta":1.0,"fecha":"2024-01-01"},
            {"casa":"blue","venta":2.0,"fecha":"2024-02-01"},
            {"casa":"blue","venta":3.0,"fecha":"2024-03-01"}
        ]"#;
        let range = DateRange::new(d(2024, 1, 15), d(2024, 2, 15)).unwrap();
        let series = parse_history(body, Casa::Blue, Some(&range)).unwrap();
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].date, d(2024, 2, 1));
    }

    #[test]
    fn history_rejects_garbage_payloads() {
        assert!(matches!(
            parse_history("not json", Casa::Blue, None),
            Err(CoreError::Parse(_))
        ));
        assert!(matches!(
            parse_history(r#"[{"casa":"blue","venta":1.0,"fecha":"15/03/2024"}]"#, Casa::Blue, None),
            Err(CoreError::Parse(_))
        ));
    }

    #[test]
    fn inflation_maps_month_stamps_to_periods() {
        let body = r#"[
            {"fecha":"2023-02-01","valor":6.6},
            {"fecha":"2023-01-01","valor":6.0}
        ]"#;
        let rates = parse_inflation(body).unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].period, Period::new(2023, 1).unwrap());
        assert_eq!(rates[0].rate, 6.0);
        assert_eq!(rates[1].period, Period::new(2023, 2).unwrap());
    }

    #[test]
    fn parse_day_is_calendar_only() {
        assert_eq!(parse_day("2024-03-15").unwrap(), d(2024, 3, 15));
        assert!(parse_day("2024-3-99").is_err());
    }
}
