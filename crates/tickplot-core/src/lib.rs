//! Core input validation for tickplot.
//!
//! This crate contains:
//! - Validated domain types for chart query inputs
//! - Selector enums for chart style and series granularity
//! - Strict calendar date parsing
//! - Structured validation errors with kind classification

pub mod domain;
pub mod error;
pub mod request;

pub use domain::{ChartDate, ChartType, Symbol, TimeSeries};
pub use error::{ErrorKind, ValidationError};
pub use request::ChartRequest;
