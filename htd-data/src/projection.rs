//! Chart-ready series derived from the dataset and the view selection.
//!
//! # Monthly
//! One series per row, named by its year, with the twelve monthly readings.
//! Labels are the month abbreviations.
//!
//! # Yearly
//! Three series over the rows: the annual figure and the annual figure plus
//! and minus one standard deviation of the months around it. Labels are the
//! store's year list.

use crate::stats::sigma_band;
use htd_core::month::month_names;
use htd_core::{Reading, TemperatureRecord, ViewMode};
use serde::Serialize;

pub const MEAN: &str = "Mean";
pub const MEAN_PLUS_SIGMA: &str = "Mean + 1σ";
pub const MEAN_MINUS_SIGMA: &str = "Mean − 1σ";

/// X-axis labels: month names or years.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Labels {
    Months(Vec<&'static str>),
    Years(Vec<i32>),
}

impl Labels {
    pub fn len(&self) -> usize {
        match self {
            Labels::Months(m) => m.len(),
            Labels::Years(y) => y.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels rendered as text, for tables and logs.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Labels::Months(m) => m.iter().map(|s| s.to_string()).collect(),
            Labels::Years(y) => y.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<Reading>,
}

/// Labels plus series, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartProjection {
    pub labels: Labels,
    pub series: Vec<Series>,
}

impl ChartProjection {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// Project the dataset for display.
///
/// `selected` is the year-filtered rows when a filter is active (possibly
/// empty) and `None` otherwise. `years` is the store's year list and becomes
/// the yearly labels as given.
pub fn project(
    dataset: &[TemperatureRecord],
    selected: Option<&[TemperatureRecord]>,
    years: &[i32],
    mode: ViewMode,
) -> ChartProjection {
    let rows = selected.unwrap_or(dataset);
    let projection = match mode {
        ViewMode::Monthly => monthly(rows),
        ViewMode::Yearly => yearly(rows, years),
    };
    log::debug!(
        "[HTD] projection: {} mode, {} rows, {} series, {} labels",
        mode,
        rows.len(),
        projection.series.len(),
        projection.labels.len()
    );
    projection
}

fn monthly(rows: &[TemperatureRecord]) -> ChartProjection {
    let series = rows
        .iter()
        .map(|record| Series {
            name: record.year.map(|y| y.to_string()).unwrap_or_default(),
            values: record.months().to_vec(),
        })
        .collect();
    ChartProjection {
        labels: Labels::Months(month_names()),
        series,
    }
}

fn yearly(rows: &[TemperatureRecord], years: &[i32]) -> ChartProjection {
    let mut mean = Vec::with_capacity(rows.len());
    let mut upper = Vec::with_capacity(rows.len());
    let mut lower = Vec::with_capacity(rows.len());
    for record in rows {
        let (lo, hi) = sigma_band(record);
        mean.push(record.annual);
        upper.push(hi);
        lower.push(lo);
    }
    ChartProjection {
        labels: Labels::Years(years.to_vec()),
        series: vec![
            Series {
                name: MEAN.to_string(),
                values: mean,
            },
            Series {
                name: MEAN_PLUS_SIGMA.to_string(),
                values: upper,
            },
            Series {
                name: MEAN_MINUS_SIGMA.to_string(),
                values: lower,
            },
        ],
    }
}
