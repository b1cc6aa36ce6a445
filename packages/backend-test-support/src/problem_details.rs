//! Problem Details test helpers
//!
//! Assertions for the stable error contract, decoupled from backend types so
//! both unit and integration tests can use them.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's problem document.
#[derive(Debug, Deserialize)]
struct ProblemDetailsLike {
    #[serde(rename = "type")]
    type_: String,
    title: String,
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract:
/// expected status and code, `application/problem+json` content type, and
/// `trace_id` parity with the `x-request-id` header when one is present.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let content_type = headers
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .expect("content-type should be valid UTF-8");
    assert_eq!(content_type, "application/problem+json");

    let problem: ProblemDetailsLike =
        serde_json::from_slice(body).expect("response body should be valid ProblemDetails JSON");

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(!problem.title.is_empty());
    assert!(!problem.type_.is_empty());

    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail {:?} does not contain {:?}",
            problem.detail,
            fragment
        );
    }

    if let Some(request_id) = headers.get("x-request-id") {
        assert_eq!(
            problem.trace_id,
            request_id.to_str().expect("request id should be valid UTF-8")
        );
    }
}
