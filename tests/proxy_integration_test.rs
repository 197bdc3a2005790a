use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use phone_formatter::adapters::proxy::{handle_proxy_request, ProxyRequest};
use phone_formatter::{FormatResponse, LibPhoneNumber, PhoneFormatter};

fn event(value: serde_json::Value) -> Result<ProxyRequest> {
    Ok(serde_json::from_value(value)?)
}

/// API Gateway REST 事件
#[test]
fn test_rest_api_event_round_trip() -> Result<()> {
    let formatter = PhoneFormatter::new(LibPhoneNumber::new());
    let request = event(serde_json::json!({
        "resource": "/FormatPhoneNumber",
        "path": "/FormatPhoneNumber",
        "httpMethod": "POST",
        "requestContext": {"stage": "prod"},
        "body": "{\"PhoneNumber\": \"+14155552671\"}",
        "isBase64Encoded": false
    }))?;

    let response = handle_proxy_request(&formatter, &request);
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );

    let body: FormatResponse = serde_json::from_str(&response.body)?;
    assert_eq!(body.original_phone_number, "+14155552671");
    assert_eq!(body.international_phone_number, "+1 415 555 2671");

    Ok(())
}

/// Function URL 事件的 body 可能是 base64
#[test]
fn test_function_url_event_with_base64_body() -> Result<()> {
    let formatter = PhoneFormatter::new(LibPhoneNumber::new());
    let request = event(serde_json::json!({
        "version": "2.0",
        "rawPath": "/",
        "requestContext": {"http": {"method": "POST"}},
        "body": STANDARD.encode(r#"{"PhoneNumber":"+14155552671"}"#),
        "isBase64Encoded": true
    }))?;

    let response = handle_proxy_request(&formatter, &request);
    assert_eq!(response.status_code, 200);

    let body: FormatResponse = serde_json::from_str(&response.body)?;
    assert_eq!(body.international_phone_number, "+1 415 555 2671");

    Ok(())
}

#[test]
fn test_bad_events_return_plain_text_400() -> Result<()> {
    let formatter = PhoneFormatter::new(LibPhoneNumber::new());

    let cases = [
        serde_json::json!({"httpMethod": "GET"}),
        serde_json::json!({"body": "{}"}),
        serde_json::json!({"body": "{\"PhoneNumber\": \"not-a-number\"}"}),
        serde_json::json!({"body": "***", "isBase64Encoded": true}),
    ];

    for case in cases {
        let response = handle_proxy_request(&formatter, &event(case)?);
        assert_eq!(response.status_code, 400);
        assert!(response.headers["Content-Type"].starts_with("text/plain"));
        assert!(response
            .body
            .starts_with("Invalid input or error processing phone number. "));
        assert!(!response.is_base64_encoded);
    }

    Ok(())
}
