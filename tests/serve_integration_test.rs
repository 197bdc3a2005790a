#![cfg(feature = "cli")]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use phone_formatter::adapters::serve::router;
use phone_formatter::{FormatResponse, LibPhoneNumber, PhoneFormatter};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    router(
        Arc::new(PhoneFormatter::new(LibPhoneNumber::new())),
        "/FormatPhoneNumber",
    )
}

async fn body_string(response: axum::response::Response) -> Result<String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn test_post_formats_number() -> Result<()> {
    let request = Request::builder()
        .method("POST")
        .uri("/FormatPhoneNumber")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"PhoneNumber": "+14155552671"}"#))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body: FormatResponse = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(body.original_phone_number, "+14155552671");
    assert_eq!(body.international_phone_number, "+1 415 555 2671");

    Ok(())
}

/// GET 也要接受 body，行為與 POST 相同
#[tokio::test]
async fn test_get_behaves_like_post() -> Result<()> {
    let request = Request::builder()
        .method("GET")
        .uri("/FormatPhoneNumber")
        .body(Body::from(r#"{"PhoneNumber": "+14155552671"}"#))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: FormatResponse = serde_json::from_str(&body_string(response).await?)?;
    assert_eq!(body.international_phone_number, "+1 415 555 2671");

    Ok(())
}

#[tokio::test]
async fn test_invalid_input_is_plain_text_400() -> Result<()> {
    for payload in ["{}", "not json", r#"{"PhoneNumber": "not-a-number"}"#, ""] {
        let request = Request::builder()
            .method("POST")
            .uri("/FormatPhoneNumber")
            .body(Body::from(payload))?;

        let response = app().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()?
            .starts_with("text/plain"));

        let body = body_string(response).await?;
        assert!(body.starts_with("Invalid input or error processing phone number. "));
    }

    Ok(())
}

#[tokio::test]
async fn test_other_paths_are_not_found() -> Result<()> {
    let request = Request::builder()
        .method("POST")
        .uri("/FormatPhoneNumbers")
        .body(Body::from(r#"{"PhoneNumber": "+14155552671"}"#))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_other_methods_are_rejected() -> Result<()> {
    let request = Request::builder()
        .method("DELETE")
        .uri("/FormatPhoneNumber")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
