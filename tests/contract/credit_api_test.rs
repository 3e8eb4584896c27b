// Contract tests for the /credits endpoints
//
// Validate the JSON shapes the API accepts and produces:
// - Required fields are present
// - Field types match the documented contract
// - Money values serialize as decimal strings
// - The credit code is a well-formed UUID

use chrono::{Duration, Utc};
use creditline::modules::credits::models::{Credit, CreditDetail, CreditResponse, CreditSummary};
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

fn sample_credit() -> Credit {
    Credit::new(
        dec!(1000),
        (Utc::now() + Duration::days(90)).date_naive(),
        5,
        1,
        dec!(1000),
    )
    .unwrap()
}

#[test]
fn test_create_credit_request_schema() {
    let request = json!({
        "credit_value": "1000",
        "day_first_installment": "2026-11-29",
        "number_of_installments": 5,
        "customer_id": 1
    });

    assert!(
        request.get("credit_value").is_some(),
        "credit_value is required"
    );
    assert!(
        request.get("day_first_installment").is_some(),
        "day_first_installment is required"
    );
    assert!(
        request.get("number_of_installments").is_some(),
        "number_of_installments is required"
    );
    assert!(
        request.get("customer_id").is_some(),
        "customer_id is required"
    );

    assert!(
        request["number_of_installments"].is_u64(),
        "number_of_installments must be a positive integer"
    );
    assert!(request["customer_id"].is_i64(), "customer_id must be an integer");
}

#[test]
fn test_credit_response_schema() {
    let response = serde_json::to_value(CreditResponse::from(sample_credit())).unwrap();

    for field in [
        "credit_code",
        "credit_value",
        "day_first_installment",
        "number_of_installments",
        "status",
        "customer_id",
    ] {
        assert!(
            response.get(field).is_some(),
            "Response must include '{}'",
            field
        );
    }

    // Money serializes as a decimal string
    assert_eq!(response["credit_value"], json!("1000"));

    // Status is the wire-format enum name
    assert_eq!(response["status"], json!("IN_PROGRESS"));

    // Credit code is a parseable UUID
    let code = response["credit_code"].as_str().unwrap();
    assert!(Uuid::parse_str(code).is_ok(), "credit_code must be a UUID");

    // Date is ISO 8601 (YYYY-MM-DD)
    let date = response["day_first_installment"].as_str().unwrap();
    assert_eq!(date.len(), 10, "day_first_installment must be YYYY-MM-DD");
}

#[test]
fn test_credit_summary_schema() {
    let summary = serde_json::to_value(CreditSummary::from(sample_credit())).unwrap();

    assert!(summary.get("credit_code").is_some());
    assert!(summary.get("credit_value").is_some());
    assert!(summary.get("number_of_installments").is_some());

    // Summaries stay compact: no status or snapshot fields
    assert!(summary.get("status").is_none());
    assert!(summary.get("income_snapshot").is_none());
}

#[test]
fn test_credit_detail_schema() {
    let detail = serde_json::to_value(CreditDetail::from(sample_credit())).unwrap();

    for field in [
        "credit_code",
        "credit_value",
        "day_first_installment",
        "number_of_installments",
        "status",
        "customer_id",
        "income_snapshot",
    ] {
        assert!(
            detail.get(field).is_some(),
            "Detail must include '{}'",
            field
        );
    }

    assert_eq!(detail["income_snapshot"], json!("1000"));
}

#[test]
fn test_error_envelope_schema() {
    use actix_web::error::ResponseError;
    use creditline::core::AppError;

    let err = AppError::validation("Credit value must be greater than zero");
    let response = err.error_response();

    assert_eq!(response.status(), 400);

    let err = AppError::not_found("credit");
    assert_eq!(err.error_response().status(), 404);
}
