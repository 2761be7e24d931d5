use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart shape selection.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// One line per year across Jan..Dec.
    #[default]
    Monthly,
    /// Annual mean with a one-sigma band, one point per year.
    Yearly,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Monthly => ViewMode::Yearly,
            ViewMode::Yearly => ViewMode::Monthly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Monthly => "Monthly",
            ViewMode::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(ViewMode::Monthly),
            "yearly" => Ok(ViewMode::Yearly),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}
