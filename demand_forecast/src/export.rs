//! Tabular export of forecast runs
//!
//! Every export uses the same four columns:
//! `Datetime, Predicted_Demand, Upper_Bound, Lower_Bound`, with `Datetime`
//! rendered as `YYYY-MM-DD HH:MM:SS`.

use crate::error::{ForecastError, Result};
use crate::forecast::{ForecastPoint, ForecastRun};
use polars::prelude::{DataFrame, NamedFrom, Series};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Format used for the `Datetime` column
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers in export order
pub const COLUMNS: [&str; 4] = ["Datetime", "Predicted_Demand", "Upper_Bound", "Lower_Bound"];

#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Datetime")]
    datetime: String,
    #[serde(rename = "Predicted_Demand")]
    predicted: f64,
    #[serde(rename = "Upper_Bound")]
    upper: f64,
    #[serde(rename = "Lower_Bound")]
    lower: f64,
}

impl From<&ForecastPoint> for CsvRow {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            datetime: point.timestamp().format(DATETIME_FORMAT).to_string(),
            predicted: point.predicted(),
            upper: point.upper(),
            lower: point.lower(),
        }
    }
}

/// Write the run as CSV with a header row
pub fn write_csv<W: Write>(run: &ForecastRun, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in run.points() {
        csv_writer.serialize(CsvRow::from(point))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the run as a CSV string
pub fn to_csv_string(run: &ForecastRun) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(run, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ForecastError::Csv(e.to_string()))
}

/// Write the run as CSV to `path`, replacing any existing file
pub fn write_csv_file<P: AsRef<Path>>(run: &ForecastRun, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(run, file)?;
    log::info!("Wrote {} forecast rows to {}", run.len(), path.as_ref().display());
    Ok(())
}

/// File name used for a city's forecast download
pub fn default_file_name(city: &str) -> String {
    format!("{}_electricity_forecast.csv", city)
}

/// Build a DataFrame with one row per forecast hour
pub fn to_dataframe(run: &ForecastRun) -> Result<DataFrame> {
    let points = run.points();
    let datetimes: Vec<String> = points
        .iter()
        .map(|p| p.timestamp().format(DATETIME_FORMAT).to_string())
        .collect();
    let upper: Vec<f64> = points.iter().map(ForecastPoint::upper).collect();
    let lower: Vec<f64> = points.iter().map(ForecastPoint::lower).collect();

    let df = DataFrame::new(vec![
        Series::new(COLUMNS[0], datetimes),
        Series::new(COLUMNS[1], run.predictions()),
        Series::new(COLUMNS[2], upper),
        Series::new(COLUMNS[3], lower),
    ])?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::run_forecast;
    use crate::models::ConstantModel;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_run() -> ForecastRun {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        run_forecast(start, 2, 1500.0, 30.0, 50.0, &ConstantModel::new(1000.0)).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv_string(&sample_run()).unwrap();
        assert_eq!(
            csv,
            "Datetime,Predicted_Demand,Upper_Bound,Lower_Bound\n\
             2025-01-02 00:00:00,1000.0,1100.0,900.0\n\
             2025-01-02 01:00:00,1000.0,1100.0,900.0\n"
        );
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name("Kochi"), "Kochi_electricity_forecast.csv");
    }

    #[test]
    fn test_dataframe_shape() {
        let df = to_dataframe(&sample_run()).unwrap();
        assert_eq!(df.shape(), (2, 4));
        assert_eq!(df.get_column_names(), COLUMNS.to_vec());
    }
}
