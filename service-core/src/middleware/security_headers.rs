use axum::{extract::Request, http::header, middleware::Next, response::Response};

/// Paths serving machine-readable API descriptions.
const DOC_PATH_PREFIX: &str = "/.well-known/";

pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let is_doc_route = req.uri().path().starts_with(DOC_PATH_PREFIX);

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        header::HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );

    // JSON API: nothing may be loaded or framed from a response body
    let csp = if is_doc_route {
        "default-src 'none'; frame-ancestors 'self'"
    } else {
        "default-src 'none'; frame-ancestors 'none'"
    };
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        header::HeaderValue::from_static(csp),
    );

    response
}
