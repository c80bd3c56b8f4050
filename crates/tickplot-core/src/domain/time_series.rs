use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::{integer_selector, raw_text};

/// Series granularity selector for the charted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TimeSeries {
    Intraday,
    Daily,
    Weekly,
    Monthly,
}

impl TimeSeries {
    pub const ALL: [Self; 4] = [Self::Intraday, Self::Daily, Self::Weekly, Self::Monthly];

    /// The numeric selector users type to pick this granularity.
    pub const fn selector(self) -> i64 {
        match self {
            Self::Intraday => 1,
            Self::Daily => 2,
            Self::Weekly => 3,
            Self::Monthly => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intraday => "intraday",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Resolve a numeric selector to a granularity.
    pub fn from_selector(selector: i64) -> Result<Self, ValidationError> {
        match selector {
            1 => Ok(Self::Intraday),
            2 => Ok(Self::Daily),
            3 => Ok(Self::Weekly),
            4 => Ok(Self::Monthly),
            other => Err(ValidationError::TimeSeriesOutOfRange { selector: other }),
        }
    }

    /// Resolve a loosely-typed value (whole number or integer text).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let selector =
            integer_selector(value).ok_or_else(|| ValidationError::TimeSeriesNotNumeric {
                value: raw_text(value),
            })?;
        Self::from_selector(selector)
    }
}

impl Display for TimeSeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSeries {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let selector =
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::TimeSeriesNotNumeric {
                    value: value.to_owned(),
                })?;
        Self::from_selector(selector)
    }
}

impl TryFrom<i64> for TimeSeries {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_selector(value)
    }
}

impl From<TimeSeries> for i64 {
    fn from(value: TimeSeries) -> Self {
        value.selector()
    }
}
