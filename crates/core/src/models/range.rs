use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A selectable dashboard time window.
///
/// Each range carries both the number of days to synthesize and the
/// stability seed used when synthesizing its previous-period comparison,
/// so re-renders of the same range always show the same
/// "vs last period" numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    /// Last 7 days
    #[serde(rename = "7d")]
    Last7Days,
    /// Last 30 days (the default selection)
    #[serde(rename = "30d")]
    Last30Days,
    /// Last 90 days
    #[serde(rename = "90d")]
    Last90Days,
}

impl DateRange {
    /// Number of days in the window.
    #[must_use]
    pub fn days(&self) -> u32 {
        match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
        }
    }

    /// Seed for previous-period synthesis, tied to the window length.
    #[must_use]
    pub fn seed(&self) -> u64 {
        u64::from(self.days())
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::Last30Days
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRange::Last7Days => write!(f, "7d"),
            DateRange::Last30Days => write!(f, "30d"),
            DateRange::Last90Days => write!(f, "90d"),
        }
    }
}

impl std::str::FromStr for DateRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(DateRange::Last7Days),
            "30d" => Ok(DateRange::Last30Days),
            "90d" => Ok(DateRange::Last90Days),
            other => Err(CoreError::ValidationError(format!(
                "Unknown date range '{other}': expected '7d', '30d', or '90d'"
            ))),
        }
    }
}
