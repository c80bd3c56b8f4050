use thiserror::Error;

/// Classification of a validation failure.
///
/// `Type` means the raw input had the wrong fundamental type (a number where
/// text was expected); `Value` means the type was right but the value is
/// unparsable or outside the allowed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

/// Validation errors exposed by `tickplot-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol can only be characters, 1-7 in length; got a {found}")]
    SymbolNotText { found: &'static str },
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains non-alphabetic character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("chart type must be a number: '{value}'")]
    ChartTypeNotNumeric { value: String },
    #[error("chart type must be either 1 or 2, got {selector}")]
    ChartTypeOutOfRange { selector: i64 },

    #[error("time series must be a number: '{value}'")]
    TimeSeriesNotNumeric { value: String },
    #[error("time series must be a number in the 1-4 range, got {selector}")]
    TimeSeriesOutOfRange { selector: i64 },

    #[error("must be a valid date in the format YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
}

impl ValidationError {
    /// Whether the failure was a type mismatch or a bad value.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SymbolNotText { .. } => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }

    /// Stable machine-readable code for the constraint violated.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SymbolNotText { .. } => "input.symbol_not_text",
            Self::EmptySymbol => "input.symbol_empty",
            Self::SymbolTooLong { .. } => "input.symbol_too_long",
            Self::SymbolInvalidChar { .. } => "input.symbol_invalid_char",
            Self::ChartTypeNotNumeric { .. } => "input.chart_type_not_numeric",
            Self::ChartTypeOutOfRange { .. } => "input.chart_type_out_of_range",
            Self::TimeSeriesNotNumeric { .. } => "input.time_series_not_numeric",
            Self::TimeSeriesOutOfRange { .. } => "input.time_series_out_of_range",
            Self::InvalidDate { .. } => "input.invalid_date",
        }
    }
}
