//! Validated domain types for chart query inputs.
//!
//! Each type owns the parsing and normalization of one user-supplied field:
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated stock ticker (1-7 letters, uppercase) |
//! | [`ChartType`] | Chart style selector (1 = bar, 2 = line) |
//! | [`TimeSeries`] | Series granularity selector (1-4) |
//! | [`ChartDate`] | Strict `YYYY-MM-DD` calendar date |
//!
//! All types enforce their invariants at construction time and round-trip
//! through serde in their canonical textual or numeric form.

mod chart_date;
mod chart_type;
mod symbol;
mod time_series;

pub use chart_date::ChartDate;
pub use chart_type::ChartType;
pub use symbol::Symbol;
pub use time_series::TimeSeries;

/// Extract an integer selector from a loosely-typed value.
///
/// Accepts a whole JSON number or a string holding integer text.
pub(crate) fn integer_selector(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(num) => num.as_i64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Raw rendering of a value for error messages.
pub(crate) fn raw_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// JSON type name used in type-mismatch error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
