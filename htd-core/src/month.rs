use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month, in January..December order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// All twelve months in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::Jan,
    Month::Feb,
    Month::Mar,
    Month::Apr,
    Month::May,
    Month::Jun,
    Month::Jul,
    Month::Aug,
    Month::Sep,
    Month::Oct,
    Month::Nov,
    Month::Dec,
];

impl Month {
    /// Three-letter abbreviation, as used in CSV headers and chart labels.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_abbrev(s: &str) -> Option<Month> {
        MONTHS.iter().copied().find(|m| m.abbrev() == s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Month abbreviations in calendar order.
pub fn month_names() -> Vec<&'static str> {
    MONTHS.iter().map(|m| m.abbrev()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_are_in_calendar_order() {
        for (i, m) in MONTHS.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert_eq!(month_names().first(), Some(&"Jan"));
        assert_eq!(month_names().last(), Some(&"Dec"));
    }

    #[test]
    fn abbrev_lookup_is_case_sensitive() {
        assert_eq!(Month::from_abbrev("Sep"), Some(Month::Sep));
        assert_eq!(Month::from_abbrev("sep"), None);
    }
}
