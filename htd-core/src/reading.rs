use serde::{Deserialize, Serialize};
use std::fmt;

/// A single temperature cell.
///
/// - `Value(f64)`: a finite reading in degrees Celsius
/// - `Missing`: the source had no usable number for this cell
///
/// Missing is never zero. It serializes as JSON `null`.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Reading {
    Value(f64),
    #[default]
    Missing,
}

impl Reading {
    /// Coerce a raw CSV cell. Anything that is not a finite number is `Missing`.
    pub fn parse(cell: &str) -> Reading {
        match cell.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Reading::Value(v),
            _ => Reading::Missing,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Reading::Missing)
    }

    /// Apply `f` to a present value; missing stays missing.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Reading {
        match self {
            Reading::Value(v) => Reading::from(Some(f(v))),
            Reading::Missing => Reading::Missing,
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Reading::Value(v),
            _ => Reading::Missing,
        }
    }
}

impl From<Reading> for Option<f64> {
    fn from(value: Reading) -> Self {
        value.value()
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::from(Some(value))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{:.1}", v),
            Reading::Missing => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reading;

    #[test]
    fn parse_numeric_cell() {
        assert_eq!(Reading::parse(" 25.7 "), Reading::Value(25.7));
        assert_eq!(Reading::parse("-3"), Reading::Value(-3.0));
    }

    #[test]
    fn parse_garbage_is_missing() {
        assert_eq!(Reading::parse(""), Reading::Missing);
        assert_eq!(Reading::parse("n/a"), Reading::Missing);
        assert_eq!(Reading::parse("NaN"), Reading::Missing);
        assert_eq!(Reading::parse("inf"), Reading::Missing);
    }

    #[test]
    fn zero_is_not_missing() {
        assert_eq!(Reading::parse("0"), Reading::Value(0.0));
        assert!(!Reading::Value(0.0).is_missing());
    }

    #[test]
    fn map_keeps_missing() {
        assert_eq!(Reading::Missing.map(|v| v + 1.0), Reading::Missing);
        assert_eq!(Reading::Value(1.5).map(|v| v * 2.0), Reading::Value(3.0));
    }

    #[test]
    fn serializes_as_number_or_null() {
        let json = serde_json::to_string(&vec![Reading::Value(1.5), Reading::Missing]).unwrap();
        assert_eq!(json, "[1.5,null]");
        let back: Vec<Reading> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Reading::Value(1.5), Reading::Missing]);
    }
}
