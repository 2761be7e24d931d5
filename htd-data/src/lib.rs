//! Chart projections and statistics for temperature records.
//!
//! This crate turns a parsed dataset plus the current view selection into
//! labeled series suitable for a line chart, and assigns display styling
//! to those series separately so the projection itself stays deterministic.

pub mod projection;
pub mod style;

pub use projection::{project, ChartProjection, Labels, Series};

/// Spread of a year's monthly readings around its annual figure.
pub mod stats {
    use htd_core::{Reading, TemperatureRecord};

    /// Population standard deviation of the present `values` around
    /// `reference` (not around their own mean).
    ///
    /// Missing readings are skipped. Returns `None` when no value is present.
    pub fn deviation_around(values: &[Reading], reference: f64) -> Option<f64> {
        let present: Vec<f64> = values.iter().filter_map(|r| r.value()).collect();
        if present.is_empty() {
            return None;
        }
        let variance = present
            .iter()
            .map(|v| (v - reference).powi(2))
            .sum::<f64>()
            / present.len() as f64;
        Some(variance.sqrt())
    }

    /// Lower and upper one-sigma bounds around the record's annual figure.
    ///
    /// Both are missing when `annual` is missing or no month is present.
    pub fn sigma_band(record: &TemperatureRecord) -> (Reading, Reading) {
        let Some(annual) = record.annual.value() else {
            return (Reading::Missing, Reading::Missing);
        };
        match deviation_around(&record.months(), annual) {
            Some(sigma) => (
                Reading::from(annual - sigma),
                Reading::from(annual + sigma),
            ),
            None => (Reading::Missing, Reading::Missing),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn deviation_uses_reference_not_own_mean() {
            // Own mean is 2.0; around 0.0 the deviation is sqrt((1+4+9)/3).
            let values = [Reading::Value(1.0), Reading::Value(2.0), Reading::Value(3.0)];
            let sigma = deviation_around(&values, 0.0).unwrap();
            assert!((sigma - (14.0f64 / 3.0).sqrt()).abs() < 1e-12);
            let around_mean = deviation_around(&values, 2.0).unwrap();
            assert!((around_mean - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
        }

        #[test]
        fn deviation_skips_missing() {
            let values = [Reading::Value(4.0), Reading::Missing, Reading::Value(6.0)];
            let sigma = deviation_around(&values, 5.0).unwrap();
            assert!((sigma - 1.0).abs() < 1e-12);
        }

        #[test]
        fn deviation_of_nothing_is_none() {
            assert_eq!(deviation_around(&[Reading::Missing; 12], 20.0), None);
            assert_eq!(deviation_around(&[], 20.0), None);
        }

        #[test]
        fn band_missing_without_annual() {
            let record = TemperatureRecord::new(1900, [Some(10.0); 12], None);
            assert_eq!(sigma_band(&record), (Reading::Missing, Reading::Missing));
        }

        #[test]
        fn band_missing_without_months() {
            let record = TemperatureRecord::new(1900, [None; 12], Some(20.0));
            assert_eq!(sigma_band(&record), (Reading::Missing, Reading::Missing));
        }

        #[test]
        fn band_is_symmetric_around_annual() {
            let mut months = [Some(18.0); 12];
            months[6] = Some(22.0);
            let record = TemperatureRecord::new(1900, months, Some(20.0));
            let (lower, upper) = sigma_band(&record);
            let lower = lower.value().unwrap();
            let upper = upper.value().unwrap();
            assert!((20.0 - lower - (upper - 20.0)).abs() < 1e-12);
            assert!((upper - 22.0).abs() < 1e-12);
        }
    }
}
