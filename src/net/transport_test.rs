use super::*;

fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
    ApiResponse { status, content_type: content_type.map(str::to_owned), body: body.to_owned() }
}

#[test]
fn ok_covers_2xx_only() {
    assert!(response(200, None, "").ok());
    assert!(response(204, None, "").ok());
    assert!(!response(307, None, "").ok());
    assert!(!response(401, None, "").ok());
}

#[test]
fn is_json_accepts_charset_suffix() {
    assert!(response(200, Some("application/json; charset=utf-8"), "{}").is_json());
    assert!(!response(500, Some("text/html"), "<html>").is_json());
    assert!(!response(500, None, "oops").is_json());
}

#[test]
fn error_for_status_carries_detail() {
    let err = response(404, Some("application/json"), r#"{"detail":"Project not found"}"#)
        .error_for_status()
        .unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 404, detail: Some("Project not found".to_owned()) });
}

#[test]
fn error_for_status_without_json_body_has_no_detail() {
    let err = response(502, Some("text/html"), "Bad Gateway").error_for_status().unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 502, detail: None });
}

#[test]
fn json_decode_failure_maps_to_decode_error() {
    let err = response(200, Some("application/json"), "not json").json::<Vec<i64>>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let req = ApiRequest {
        method: Method::Get,
        url: "/projects".to_owned(),
        bearer: Some("abc".to_owned()),
        body: RequestBody::Empty,
    };
    assert_eq!(req.authorization().as_deref(), Some("Bearer abc"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_transport_is_unavailable_natively() {
    let req = ApiRequest { method: Method::Get, url: "/projects".to_owned(), bearer: None, body: RequestBody::Empty };
    let result = futures::executor::block_on(HttpTransport.send(req));
    assert_eq!(result, Err(ApiError::Unavailable));
}
