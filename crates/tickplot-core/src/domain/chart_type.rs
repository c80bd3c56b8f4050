use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

use super::{integer_selector, raw_text};

/// Chart style selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ChartType {
    Bar,
    Line,
}

impl ChartType {
    pub const ALL: [Self; 2] = [Self::Bar, Self::Line];

    /// The numeric selector users type to pick this chart style.
    pub const fn selector(self) -> i64 {
        match self {
            Self::Bar => 1,
            Self::Line => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }

    /// Resolve a numeric selector to a chart style.
    pub fn from_selector(selector: i64) -> Result<Self, ValidationError> {
        match selector {
            1 => Ok(Self::Bar),
            2 => Ok(Self::Line),
            other => Err(ValidationError::ChartTypeOutOfRange { selector: other }),
        }
    }

    /// Resolve a loosely-typed value (whole number or integer text).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let selector =
            integer_selector(value).ok_or_else(|| ValidationError::ChartTypeNotNumeric {
                value: raw_text(value),
            })?;
        Self::from_selector(selector)
    }
}

impl Display for ChartType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let selector =
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::ChartTypeNotNumeric {
                    value: value.to_owned(),
                })?;
        Self::from_selector(selector)
    }
}

impl TryFrom<i64> for ChartType {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_selector(value)
    }
}

impl From<ChartType> for i64 {
    fn from(value: ChartType) -> Self {
        value.selector()
    }
}
