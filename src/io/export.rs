//! Export chart-ready results and aligned histories to disk.
//!
//! JSON carries the exact rendering-boundary structure; CSV is meant to be
//! easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{AlignedSeriesSet, ChartReadyResult};
use crate::error::{CoreError, Result};

/// Write a chart-ready result as pretty JSON.
pub fn write_chart_json(path: &Path, chart: &ChartReadyResult) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        CoreError::Config(format!("Failed to create chart JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, chart)
        .map_err(|e| CoreError::Config(format!("Failed to write chart JSON: {e}")))?;

    Ok(())
}

/// Write an aligned set as CSV: one row per date, one column per series.
pub fn write_history_csv(path: &Path, set: &AlignedSeriesSet) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        CoreError::Config(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    let mut header = String::from("date");
    for s in &set.series {
        header.push(',');
        header.push_str(&s.name.to_lowercase().replace(' ', "_"));
    }
    writeln!(file, "{header}")
        .map_err(|e| CoreError::Config(format!("Failed to write export CSV header: {e}")))?;

    for (i, date) in set.dates.iter().enumerate() {
        let mut row = date.to_string();
        for s in &set.series {
            row.push(',');
            if let Some(v) = s.values[i] {
                row.push_str(&format!("{v:.4}"));
            }
        }
        writeln!(file, "{row}")
            .map_err(|e| CoreError::Config(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
