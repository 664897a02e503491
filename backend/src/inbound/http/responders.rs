//! Shared response utilities for the HTTP adapter.
//!
//! Every non-2xx response body is an [`Errors`] array so clients never see a
//! bare string or an HTML page. Server-side failures are logged here before
//! a generic message goes to the client.

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::domain::{Error, Errors};

/// Exact media type required on POST/PATCH requests and set on responses.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Write `errors` as the body of a response with the given status.
///
/// The content type is set on the builder before the body is rendered. A
/// failure encoding the error body itself is logged and yields an empty
/// body with the same status.
pub fn errors_response(status: StatusCode, errors: &Errors) -> HttpResponse {
    match serde_json::to_string(errors) {
        Ok(body) => HttpResponse::build(status)
            .content_type(JSON_MEDIA_TYPE)
            .body(body),
        Err(err) => {
            error!(error = %err, "failure encoding error response");
            HttpResponse::build(status)
                .content_type(JSON_MEDIA_TYPE)
                .finish()
        }
    }
}

/// One-element `Other` error response, the shape shared by bad-media-type,
/// bad-body, not-found, and server-fault cases.
pub fn other_error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    errors_response(status, &vec![Error::other(message)])
}

/// Validation-failure response: 400 with the full error sequence.
pub fn validation_error_response(errors: Errors) -> HttpResponse {
    errors_response(StatusCode::BAD_REQUEST, &errors)
}

/// 404 with a message naming the request path.
pub fn not_found(req: &HttpRequest) -> HttpResponse {
    let message = format!("Path '{}' not found", req.path());
    error!("{message}");
    other_error_response(StatusCode::NOT_FOUND, message)
}

/// Log a server-side failure and collapse it to a generic 500.
pub fn server_error(err: impl std::fmt::Display) -> HttpResponse {
    error!(error = %err, "server error");
    other_error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Internal server error: {err}"),
    )
}

/// Render a success payload as JSON.
///
/// Serializes before the response is built so a serialization failure takes
/// the logged-500 path instead of truncating a success response.
pub fn json_response(status: StatusCode, value: &impl Serialize) -> HttpResponse {
    match serde_json::to_string(value) {
        Ok(body) => HttpResponse::build(status)
            .content_type(JSON_MEDIA_TYPE)
            .body(body),
        Err(err) => server_error(err),
    }
}

/// Gate for write requests: the `Content-Type` media type must parse and its
/// essence must equal [`JSON_MEDIA_TYPE`]. Parameters such as `charset` are
/// tolerated; anything else is 415.
pub fn require_json_media_type(req: &HttpRequest) -> Result<(), HttpResponse> {
    let raw = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    match raw.parse::<mime::Mime>() {
        Ok(media_type) if media_type.essence_str() == JSON_MEDIA_TYPE => Ok(()),
        _ => Err(other_error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Bad Content-Type '{raw}'"),
        )),
    }
}

/// Decode a request body into an input representation.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HttpResponse> {
    serde_json::from_slice(body).map_err(|err| {
        other_error_response(StatusCode::BAD_REQUEST, format!("Bad request: {err}"))
    })
}

/// Default service for unmatched routes.
pub async fn fallback_not_found(req: HttpRequest) -> HttpResponse {
    not_found(&req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    use crate::domain::ErrorCode;

    async fn body_errors(response: HttpResponse) -> Errors {
        let bytes = to_bytes(response.into_body()).await.expect("body to bytes");
        serde_json::from_slice(&bytes).expect("errors body parses")
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_names_the_request_path() {
        let req = TestRequest::get().uri("/categories/999").to_http_request();
        let response = not_found(&req);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let errors = body_errors(response).await;
        assert_eq!(errors, vec![Error::other("Path '/categories/999' not found")]);
    }

    #[rstest]
    #[actix_web::test]
    async fn server_errors_keep_the_errors_shape() {
        let response = server_error("boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let errors = body_errors(response).await;
        assert_eq!(errors[0].code, ErrorCode::Other);
        assert_eq!(errors[0].message, "Internal server error: boom");
    }

    #[rstest]
    #[case("application/json")]
    #[case("application/json; charset=utf-8")]
    fn json_media_types_pass_the_gate(#[case] content_type: &str) {
        let req = TestRequest::post()
            .insert_header((CONTENT_TYPE, content_type))
            .to_http_request();
        assert!(require_json_media_type(&req).is_ok());
    }

    #[rstest]
    #[case("text/plain")]
    #[case("application/xml")]
    #[case("not a media type")]
    fn other_media_types_are_unsupported(#[case] content_type: &str) {
        let req = TestRequest::post()
            .insert_header((CONTENT_TYPE, content_type))
            .to_http_request();
        let response = require_json_media_type(&req).expect_err("gate must reject");
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[rstest]
    fn missing_content_type_is_unsupported() {
        let req = TestRequest::post().to_http_request();
        let response = require_json_media_type(&req).expect_err("gate must reject");
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_bodies_report_the_decode_error() {
        let result: Result<crate::domain::CategoryIn, _> = decode_body(b"{not json");
        let response = result.expect_err("decode must fail");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let errors = body_errors(response).await;
        assert_eq!(errors[0].code, ErrorCode::Other);
        assert!(errors[0].message.starts_with("Bad request: "));
    }
}
