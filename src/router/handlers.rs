use bytes::Bytes;

use crate::http::request::Request;
use crate::http::response::{Response, StatusCode, OCTET_STREAM, TEXT_PLAIN};

pub const HOME_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Home</title></head>
<body>
<h1>It works 🎉</h1>
<p>You built HTTP over raw TCP in Rust.</p>
<p>Try <a href="/hello">/hello</a> or POST to <code>/echo</code>.</p>
</body></html>"#;

pub const GREETING: &str = "Hello from raw TCP HTTP!\n";

pub fn home(_req: &Request) -> Response {
    Response::html(HOME_PAGE)
}

pub fn hello(_req: &Request) -> Response {
    Response::new(StatusCode::Ok, TEXT_PLAIN, GREETING)
}

/// Sends the request body back with the client's content type.
pub fn echo(req: &Request) -> Response {
    let content_type = match req.content_type() {
        Some(ct) if !ct.is_empty() => Bytes::copy_from_slice(ct),
        _ => Bytes::from_static(OCTET_STREAM.as_bytes()),
    };
    Response::new(StatusCode::Ok, content_type, req.body.clone())
}

pub fn not_found(_req: &Request) -> Response {
    Response::not_found()
}

/// Sent by the connection itself when a request cannot be parsed.
pub fn bad_request(reason: &str) -> Response {
    Response::bad_request(reason)
}
