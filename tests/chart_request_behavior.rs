//! Behavior-driven tests for assembling a validated chart request
//!
//! These tests verify HOW the four validated fields come together from a
//! loosely-typed payload, and that serde round-trips preserve canonical form.

use tickplot_core::{ChartRequest, ChartType, ErrorKind, TimeSeries, ValidationError};

#[test]
fn when_every_field_is_valid_the_request_assembles() {
    // Given: A complete form payload with mixed raw types
    let form = serde_json::json!({
        "symbol": "nvda",
        "chart_type": "1",
        "time_series": 4,
        "start_date": "2022-10-01",
        "end_date": "2022-10-31",
    });

    // When: The form is validated
    let request = ChartRequest::from_form(&form).expect("form must validate");

    // Then: Every field is in canonical form
    assert_eq!(request.symbol.as_str(), "NVDA");
    assert_eq!(request.chart_type, ChartType::Bar);
    assert_eq!(request.time_series, TimeSeries::Monthly);
    assert_eq!(request.start_date.format_ymd(), "2022-10-01");
    assert_eq!(request.end_date.format_ymd(), "2022-10-31");
}

#[test]
fn when_the_symbol_field_is_numeric_the_request_fails_with_a_type_error() {
    let form = serde_json::json!({
        "symbol": 404,
        "chart_type": 1,
        "time_series": 2,
        "start_date": "2022-10-01",
        "end_date": "2022-10-31",
    });

    let error = ChartRequest::from_form(&form).expect_err("must fail");
    assert_eq!(error.kind(), ErrorKind::Type);
}

#[test]
fn when_the_end_date_is_malformed_the_request_fails_with_the_date_message() {
    let form = serde_json::json!({
        "symbol": "AAPL",
        "chart_type": 1,
        "time_series": 2,
        "start_date": "2022-10-01",
        "end_date": "2022-10-32",
    });

    let error = ChartRequest::from_form(&form).expect_err("must fail");
    assert!(matches!(error, ValidationError::InvalidDate { .. }));
    assert!(error.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn when_start_is_after_end_the_request_still_assembles() {
    // No ordering is enforced between the two dates; the range is carried
    // to the backend as typed.
    let form = serde_json::json!({
        "symbol": "AAPL",
        "chart_type": 2,
        "time_series": 2,
        "start_date": "2022-10-31",
        "end_date": "2022-10-01",
    });

    let request = ChartRequest::from_form(&form).expect("reversed range is accepted");
    assert!(request.start_date > request.end_date);
}

#[test]
fn request_round_trips_through_json_in_canonical_form() {
    let form = serde_json::json!({
        "symbol": "msft",
        "chart_type": 2,
        "time_series": "3",
        "start_date": "2024-02-29",
        "end_date": "2024-03-01",
    });
    let request = ChartRequest::from_form(&form).expect("form must validate");

    let encoded = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        encoded,
        serde_json::json!({
            "symbol": "MSFT",
            "chart_type": 2,
            "time_series": 3,
            "start_date": "2024-02-29",
            "end_date": "2024-03-01",
        })
    );

    let decoded: ChartRequest = serde_json::from_value(encoded).expect("deserialize");
    assert_eq!(decoded, request);
}

#[test]
fn deserializing_a_request_rejects_invalid_fields() {
    // Strict payloads go through serde; the domain errors surface as
    // deserialization messages.
    let payload = serde_json::json!({
        "symbol": "WAYTOOLONG",
        "chart_type": 1,
        "time_series": 1,
        "start_date": "2022-10-01",
        "end_date": "2022-10-31",
    });

    let result: Result<ChartRequest, _> = serde_json::from_value(payload);
    let error = result.expect_err("over-long symbol must fail");
    assert!(error.to_string().contains("exceeds max"), "was: {error}");
}
