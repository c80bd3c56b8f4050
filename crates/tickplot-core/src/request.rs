use serde::{Deserialize, Serialize};

use crate::domain::{ChartDate, ChartType, Symbol, TimeSeries};
use crate::ValidationError;

/// A fully validated chart query, ready to hand to a data-fetch backend.
///
/// Every field has already been normalized by its type. Start and end dates
/// are carried as-is: no ordering between them is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub symbol: Symbol,
    pub chart_type: ChartType,
    pub time_series: TimeSeries,
    pub start_date: ChartDate,
    pub end_date: ChartDate,
}

impl ChartRequest {
    pub fn new(
        symbol: Symbol,
        chart_type: ChartType,
        time_series: TimeSeries,
        start_date: ChartDate,
        end_date: ChartDate,
    ) -> Self {
        Self {
            symbol,
            chart_type,
            time_series,
            start_date,
            end_date,
        }
    }

    /// Validate a loosely-typed form payload field by field.
    ///
    /// The first failing field aborts validation; missing fields are treated
    /// as null and fail that field's own check.
    pub fn from_form(form: &serde_json::Value) -> Result<Self, ValidationError> {
        let null = serde_json::Value::Null;
        let field = |name: &str| form.get(name).unwrap_or(&null);

        Ok(Self {
            symbol: Symbol::from_value(field("symbol"))?,
            chart_type: ChartType::from_value(field("chart_type"))?,
            time_series: TimeSeries::from_value(field("time_series"))?,
            start_date: ChartDate::from_value(field("start_date"))?,
            end_date: ChartDate::from_value(field("end_date"))?,
        })
    }
}
