use crate::column::Column;
use crate::month::{Month, MONTHS};
use crate::reading::Reading;
use serde::{Deserialize, Serialize};

/// One row of a temperature CSV: a year, twelve monthly readings and the
/// annual figure as supplied by the file.
///
/// Field names serialize as the CSV header tokens (`Year`, `Jan`, ...,
/// `Annual`) so the JSON body matches what the upload endpoint echoes.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct TemperatureRecord {
    #[serde(rename = "Year", default)]
    pub year: Option<i32>,
    #[serde(rename = "Jan", default)]
    pub jan: Reading,
    #[serde(rename = "Feb", default)]
    pub feb: Reading,
    #[serde(rename = "Mar", default)]
    pub mar: Reading,
    #[serde(rename = "Apr", default)]
    pub apr: Reading,
    #[serde(rename = "May", default)]
    pub may: Reading,
    #[serde(rename = "Jun", default)]
    pub jun: Reading,
    #[serde(rename = "Jul", default)]
    pub jul: Reading,
    #[serde(rename = "Aug", default)]
    pub aug: Reading,
    #[serde(rename = "Sep", default)]
    pub sep: Reading,
    #[serde(rename = "Oct", default)]
    pub oct: Reading,
    #[serde(rename = "Nov", default)]
    pub nov: Reading,
    #[serde(rename = "Dec", default)]
    pub dec: Reading,
    /// Precomputed yearly aggregate from the source; never derived from the months.
    #[serde(rename = "Annual", default)]
    pub annual: Reading,
}

/// Insertion-ordered rows. Years are not unique.
pub type Dataset = Vec<TemperatureRecord>;

impl TemperatureRecord {
    /// Build a record from a year, twelve monthly values and an annual value.
    pub fn new(year: i32, months: [Option<f64>; 12], annual: Option<f64>) -> Self {
        let mut record = TemperatureRecord {
            year: Some(year),
            annual: Reading::from(annual),
            ..Default::default()
        };
        for (month, value) in MONTHS.iter().zip(months) {
            record.set_month(*month, Reading::from(value));
        }
        record
    }

    pub fn month(&self, month: Month) -> Reading {
        match month {
            Month::Jan => self.jan,
            Month::Feb => self.feb,
            Month::Mar => self.mar,
            Month::Apr => self.apr,
            Month::May => self.may,
            Month::Jun => self.jun,
            Month::Jul => self.jul,
            Month::Aug => self.aug,
            Month::Sep => self.sep,
            Month::Oct => self.oct,
            Month::Nov => self.nov,
            Month::Dec => self.dec,
        }
    }

    pub fn set_month(&mut self, month: Month, reading: Reading) {
        let slot = match month {
            Month::Jan => &mut self.jan,
            Month::Feb => &mut self.feb,
            Month::Mar => &mut self.mar,
            Month::Apr => &mut self.apr,
            Month::May => &mut self.may,
            Month::Jun => &mut self.jun,
            Month::Jul => &mut self.jul,
            Month::Aug => &mut self.aug,
            Month::Sep => &mut self.sep,
            Month::Oct => &mut self.oct,
            Month::Nov => &mut self.nov,
            Month::Dec => &mut self.dec,
        };
        *slot = reading;
    }

    /// The twelve monthly readings, Jan..Dec.
    pub fn months(&self) -> [Reading; 12] {
        MONTHS.map(|m| self.month(m))
    }

    /// Store a raw CSV cell under `column`. Unparseable text becomes missing.
    pub fn set_cell(&mut self, column: Column, cell: &str) {
        match column {
            Column::Year => self.year = parse_year(cell),
            Column::Month(m) => self.set_month(m, Reading::parse(cell)),
            Column::Annual => self.annual = Reading::parse(cell),
        }
    }
}

/// Years go through the same numeric coercion as readings and must be integral.
fn parse_year(cell: &str) -> Option<i32> {
    let value = Reading::parse(cell).value()?;
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}
