//! HTTP response building module
//!
//! Builders for JSON bodies and the error statuses the router can produce.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, SERVER};
use hyper::{Response, StatusCode};
use serde::Serialize;

pub type HttpResponse = Response<Full<Bytes>>;

/// Build a JSON response; HEAD requests get headers and an empty body
pub fn build_json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> HttpResponse {
    let json = match serde_json::to_vec_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            log_error(&format!("Failed to serialize response: {e}"));
            return build_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serialize response",
            );
        }
    };

    let content_length = json.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(json)
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// JSON error body: `{"error": "<reason>", "detail": "<message>"}`
pub fn build_error_response(status: StatusCode, detail: &str) -> HttpResponse {
    let body = serde_json::json!({
        "error": status.canonical_reason().unwrap_or("Error"),
        "detail": detail,
    });

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from(detail.to_string())))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &str) -> HttpResponse {
    let mut resp = build_error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    if let Ok(value) = HeaderValue::from_str(allow) {
        resp.headers_mut().insert(ALLOW, value);
    }
    resp
}

/// Build 413 Payload Too Large response
pub fn build_413_response(max_body_size: u64) -> HttpResponse {
    build_error_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        &format!("Request body exceeds {max_body_size} bytes"),
    )
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(allow: &str, enable_cors: bool) -> HttpResponse {
    let mut builder = Response::builder().status(204).header("Allow", allow);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", allow)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Attach headers every response carries: `Server`, plus CORS origin when enabled
pub fn with_common_headers(
    mut resp: HttpResponse,
    server_name: &str,
    enable_cors: bool,
) -> HttpResponse {
    let headers = resp.headers_mut();
    if let Ok(value) = HeaderValue::from_str(server_name) {
        headers.insert(SERVER, value);
    }
    if enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
    resp
}

fn log_error(message: &str) {
    crate::logger::log_error(message);
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_json_response() {
        let resp = build_json_response(StatusCode::OK, &serde_json::json!({"status": "ok"}), false);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_json_response_head_has_no_body() {
        let resp = build_json_response(StatusCode::OK, &serde_json::json!({"status": "ok"}), true);
        let declared: usize = resp.headers()["Content-Length"]
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!(declared > 0);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let resp = build_error_response(StatusCode::NOT_FOUND, "Unknown topic");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["detail"], "Unknown topic");
    }

    #[test]
    fn test_405_carries_allow() {
        let resp = build_405_response("POST, OPTIONS");
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "POST, OPTIONS");
    }

    #[test]
    fn test_options_cors_headers() {
        let resp = build_options_response("GET, HEAD, OPTIONS", true);
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().contains_key("Access-Control-Allow-Methods"));

        let resp = build_options_response("GET, HEAD, OPTIONS", false);
        assert!(!resp.headers().contains_key("Access-Control-Allow-Methods"));
    }

    #[test]
    fn test_common_headers() {
        let resp = build_error_response(StatusCode::NOT_FOUND, "x");
        let resp = with_common_headers(resp, "ExamPrep/0.1", true);
        assert_eq!(resp.headers()["Server"], "ExamPrep/0.1");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    }
}
