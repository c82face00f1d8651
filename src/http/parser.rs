use std::fmt;

use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt};

use crate::http::reader::read_line;
use crate::http::request::{Headers, Request};

#[derive(Debug)]
pub enum ParseError {
    /// The stream ended before a complete line was read
    EndOfStream,
    /// Transport failure while reading
    Io(std::io::Error),
    MalformedStartLine,
    MalformedHeaderBlock,
    InvalidContentLength,
    IncompleteBody,
}

impl ParseError {
    /// Message sent back in a 400 response, or `None` when the error is not
    /// the client's fault and the connection should just be dropped.
    pub fn bad_request_reason(&self) -> Option<&'static str> {
        match self {
            ParseError::MalformedStartLine => Some("Invalid start line"),
            ParseError::MalformedHeaderBlock => Some("Invalid headers"),
            ParseError::InvalidContentLength => Some("Invalid Content-Length"),
            ParseError::IncompleteBody => Some("Could not read body"),
            ParseError::EndOfStream | ParseError::Io(_) => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EndOfStream => write!(f, "unexpected end of stream"),
            ParseError::Io(e) => write!(f, "I/O error: {}", e),
            ParseError::MalformedStartLine => write!(f, "malformed start line"),
            ParseError::MalformedHeaderBlock => write!(f, "malformed header block"),
            ParseError::InvalidContentLength => write!(f, "invalid Content-Length"),
            ParseError::IncompleteBody => write!(f, "body shorter than Content-Length"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Splits a start line into `(method, path, version)`.
///
/// Fields are separated by runs of whitespace and returned verbatim.
pub fn parse_start_line(line: &str) -> Result<(String, String, String), ParseError> {
    let mut parts = line.split_whitespace();

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(path), Some(version), None) => {
            Ok((method.to_string(), path.to_string(), version.to_string()))
        }
        _ => Err(ParseError::MalformedStartLine),
    }
}

/// Reads header lines up to and including the blank line that ends the block.
///
/// Lines without a colon, or starting with one, are skipped.
pub async fn read_headers<R>(reader: &mut R) -> Result<Headers, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = Headers::new();

    loop {
        let line = read_line(reader).await?;
        if line.is_empty() {
            break;
        }

        match line.iter().position(|&b| b == b':') {
            Some(colon) if colon > 0 => {
                headers.insert(&line[..colon], &line[colon + 1..]);
            }
            _ => continue,
        }
    }

    Ok(headers)
}

/// Parses a `Content-Length` value.
///
/// A leading sign is allowed, so `+5` and `-0` are accepted; any value
/// below zero is rejected.
pub fn parse_content_length(value: &str) -> Result<usize, ParseError> {
    let n = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidContentLength)?;

    usize::try_from(n).map_err(|_| ParseError::InvalidContentLength)
}

/// Reads the request body described by `headers`.
///
/// Without a `Content-Length` header the body is empty and nothing is read.
pub async fn read_body<R>(reader: &mut R, headers: &Headers) -> Result<Vec<u8>, ParseError>
where
    R: AsyncRead + Unpin,
{
    let Some(raw) = headers.get_bytes("content-length") else {
        return Ok(Vec::new());
    };
    let value = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidContentLength)?;
    let len = parse_content_length(value)?;

    // Grow with the data actually received instead of trusting `len` up front.
    let mut body = Vec::new();
    (&mut *reader).take(len as u64).read_to_end(&mut body).await?;

    if body.len() < len {
        return Err(ParseError::IncompleteBody);
    }

    Ok(body)
}

/// Reads one complete request: start line, headers, then body.
///
/// Returns `Ok(None)` when the client sent an empty start line. A stream
/// that ends inside the header block is reported as
/// [`ParseError::MalformedHeaderBlock`]; ending before the start line
/// completes stays [`ParseError::EndOfStream`].
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let start_line = read_line(reader).await?;
    if start_line.is_empty() {
        return Ok(None);
    }

    let (method, path, version) = parse_start_line(&String::from_utf8_lossy(&start_line))?;

    let headers = match read_headers(reader).await {
        Ok(headers) => headers,
        Err(ParseError::EndOfStream) => return Err(ParseError::MalformedHeaderBlock),
        Err(e) => return Err(e),
    };

    let body = read_body(reader, &headers).await?;

    Ok(Some(Request {
        method,
        path,
        version,
        headers,
        body,
    }))
}
