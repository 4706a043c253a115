use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named numeric metrics carried by every prediction-grid feature.
pub const METRICS: [&str; 5] = [
    "temperature",
    "traffic",
    "pm25",
    "green_cover",
    "heat_risk_index",
];

pub const DEFAULT_METRIC: &str = "heat_risk_index";

/// Years the prediction service will simulate.
pub const SUPPORTED_YEARS: [i32; 4] = [2025, 2030, 2035, 2040];

pub const DEFAULT_YEAR: i32 = 2025;

pub fn is_supported_year(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

pub fn is_known_metric(metric: &str) -> bool {
    METRICS.contains(&metric)
}

/// Binary query variant: the baseline city or the city with the proposed
/// development applied.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    #[default]
    Before,
    After,
}

impl Scenario {
    /// Wire spelling used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Before => "Before",
            Scenario::After => "After",
        }
    }

    /// Maps the scenario toggle widget: checked means "After".
    pub fn from_toggle(checked: bool) -> Scenario {
        if checked {
            Scenario::After
        } else {
            Scenario::Before
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioParseError(pub String);

impl fmt::Display for ScenarioParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scenario {:?} (expected Before or After)", self.0)
    }
}

impl std::error::Error for ScenarioParseError {}

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("before") => Ok(Scenario::Before),
            _ if s.eq_ignore_ascii_case("after") => Ok(Scenario::After),
            other => Err(ScenarioParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_supported_year, Scenario, SUPPORTED_YEARS};

    #[test]
    fn year_support_matches_catalog() {
        for year in SUPPORTED_YEARS {
            assert!(is_supported_year(year));
        }
        assert!(!is_supported_year(2026));
    }

    #[test]
    fn scenario_round_trips_wire_spelling() {
        assert_eq!("After".parse::<Scenario>().unwrap(), Scenario::After);
        assert_eq!("before".parse::<Scenario>().unwrap(), Scenario::Before);
        assert!("during".parse::<Scenario>().is_err());
        assert_eq!(Scenario::After.as_str(), "After");
    }

    #[test]
    fn toggle_checked_means_after() {
        assert_eq!(Scenario::from_toggle(true), Scenario::After);
        assert_eq!(Scenario::from_toggle(false), Scenario::Before);
    }
}
