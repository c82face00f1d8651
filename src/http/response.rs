use bytes::Bytes;

pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP status codes produced by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A response ready to be serialized.
///
/// Only the content type is configurable; `Content-Length` and
/// `Connection: close` are added by the writer. The content type is raw
/// bytes so an echoed client value goes back out unchanged.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: Bytes,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, content_type: impl Into<Bytes>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// A 200 response carrying an HTML document.
    pub fn html(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::Ok, TEXT_HTML, body)
    }

    /// A plain-text response; a trailing newline is appended to `message`.
    pub fn text(status: StatusCode, message: &str) -> Self {
        Self::new(status, TEXT_PLAIN, format!("{}\n", message))
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::text(StatusCode::NotFound, "Route not found")
    }

    /// Creates a 400 Bad Request response describing what was wrong.
    pub fn bad_request(reason: &str) -> Self {
        Self::text(StatusCode::BadRequest, reason)
    }
}
