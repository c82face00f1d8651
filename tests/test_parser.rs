use rawhttp::http::parser::{
    parse_content_length, parse_start_line, read_body, read_headers, read_request, ParseError,
};
use rawhttp::http::request::Headers;
use tokio::io::BufReader;

fn reader(bytes: &'static [u8]) -> BufReader<&'static [u8]> {
    BufReader::new(bytes)
}

#[test]
fn test_start_line_three_fields() {
    let triples = [
        ("GET", "/", "HTTP/1.1"),
        ("POST", "/echo", "HTTP/1.0"),
        ("BREW", "/search?q=rust", "HTCPCP/1.0"),
        ("get", "*", "whatever"),
    ];

    for (method, path, version) in triples {
        let line = format!("{} {} {}", method, path, version);
        let parsed = parse_start_line(&line).unwrap();
        assert_eq!(parsed, (method.to_string(), path.to_string(), version.to_string()));
    }
}

#[test]
fn test_start_line_splits_on_whitespace_runs() {
    let parsed = parse_start_line("  GET \t /hello   HTTP/1.1 ").unwrap();
    assert_eq!(parsed.0, "GET");
    assert_eq!(parsed.1, "/hello");
    assert_eq!(parsed.2, "HTTP/1.1");
}

#[test]
fn test_start_line_wrong_field_count() {
    for line in ["", "   ", "GET", "GET /", "GET / HTTP/1.1 extra", "A B C D E"] {
        assert!(
            matches!(parse_start_line(line), Err(ParseError::MalformedStartLine)),
            "line {:?} should be rejected",
            line
        );
    }
}

#[tokio::test]
async fn test_headers_lower_cased_and_trimmed() {
    let mut r = reader(b"Host:  example.com \r\nX-Custom-Header:value\r\n\r\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.len(), 2);
    let mut names: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
    names.sort();
    assert_eq!(names, vec!["host", "x-custom-header"]);
    assert_eq!(headers.get("host"), Some("example.com"));
    assert_eq!(headers.get("x-custom-header"), Some("value"));
}

#[tokio::test]
async fn test_duplicate_header_overwrites() {
    let mut r = reader(b"X: 1\r\nX: 2\r\n\r\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("x"), Some("2"));
}

#[tokio::test]
async fn test_malformed_header_lines_are_dropped() {
    let mut r = reader(b"BrokenHeader\r\n: no-name\r\nGood: yes\r\n\r\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("good"), Some("yes"));
}

#[tokio::test]
async fn test_header_value_keeps_later_colons() {
    let mut r = reader(b"Host: localhost:8080\r\n\r\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.get("host"), Some("localhost:8080"));
}

#[tokio::test]
async fn test_headers_accept_bare_lf() {
    let mut r = reader(b"A: 1\nB: 2\n\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.get("a"), Some("1"));
    assert_eq!(headers.get("b"), Some("2"));
}

#[tokio::test]
async fn test_unterminated_header_block() {
    let mut r = reader(b"Host: example.com\r\n");
    assert!(matches!(read_headers(&mut r).await, Err(ParseError::EndOfStream)));
}

#[tokio::test]
async fn test_non_utf8_header_value_kept_verbatim() {
    let mut r = reader(b"Content-Type: a\xffb\r\n\r\n");
    let headers = read_headers(&mut r).await.unwrap();

    assert_eq!(headers.get_bytes("content-type"), Some(&b"a\xffb"[..]));
}

#[tokio::test]
async fn test_body_with_negative_zero_length() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "-0");

    let mut r = reader(b"extra");
    assert!(read_body(&mut r, &headers).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_body_non_utf8_content_length() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", b"\xff");

    let mut r = reader(b"data");
    assert!(matches!(
        read_body(&mut r, &headers).await,
        Err(ParseError::InvalidContentLength)
    ));
}

#[test]
fn test_content_length_values() {
    assert_eq!(parse_content_length("5").unwrap(), 5);
    assert_eq!(parse_content_length(" 0 ").unwrap(), 0);
    assert_eq!(parse_content_length("+5").unwrap(), 5);
    assert_eq!(parse_content_length("-0").unwrap(), 0);
    assert!(matches!(parse_content_length("-1"), Err(ParseError::InvalidContentLength)));
    assert!(matches!(parse_content_length("abc"), Err(ParseError::InvalidContentLength)));
    assert!(matches!(parse_content_length(""), Err(ParseError::InvalidContentLength)));
    assert!(matches!(
        parse_content_length("99999999999999999999999999"),
        Err(ParseError::InvalidContentLength)
    ));
}

#[tokio::test]
async fn test_body_exact_length() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "5");

    let mut r = reader(b"hello");
    assert_eq!(read_body(&mut r, &headers).await.unwrap(), b"hello".to_vec());
}

#[tokio::test]
async fn test_body_reads_only_declared_length() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "3");

    let mut r = reader(b"abcdef");
    assert_eq!(read_body(&mut r, &headers).await.unwrap(), b"abc".to_vec());
}

#[tokio::test]
async fn test_body_short_stream() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "5");

    let mut r = reader(b"hell");
    assert!(matches!(read_body(&mut r, &headers).await, Err(ParseError::IncompleteBody)));
}

#[tokio::test]
async fn test_body_absent_without_content_length() {
    let mut r = reader(b"ignored");
    assert!(read_body(&mut r, &Headers::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_body_negative_content_length() {
    let mut headers = Headers::new();
    headers.insert("Content-Length", "-4");

    let mut r = reader(b"data");
    assert!(matches!(
        read_body(&mut r, &headers).await,
        Err(ParseError::InvalidContentLength)
    ));
}

#[tokio::test]
async fn test_read_request_post_with_body() {
    let mut r = reader(b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello");
    let req = read_request(&mut r).await.unwrap().unwrap();

    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/api");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.body, b"hello".to_vec());
}

#[tokio::test]
async fn test_read_request_binary_body() {
    let mut r = reader(b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03");
    let req = read_request(&mut r).await.unwrap().unwrap();

    assert_eq!(req.body, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_read_request_empty_start_line() {
    let mut r = reader(b"\r\nGET / HTTP/1.1\r\n\r\n");
    assert!(read_request(&mut r).await.unwrap().is_none());
}

#[tokio::test]
async fn test_read_request_empty_stream() {
    let mut r = reader(b"");
    assert!(matches!(read_request(&mut r).await, Err(ParseError::EndOfStream)));
}

#[tokio::test]
async fn test_read_request_unterminated_headers() {
    let mut r = reader(b"GET / HTTP/1.1\r\nHost: example.com\r\n");
    assert!(matches!(
        read_request(&mut r).await,
        Err(ParseError::MalformedHeaderBlock)
    ));
}

#[tokio::test]
async fn test_read_request_bad_start_line() {
    let mut r = reader(b"GET /\r\n\r\n");
    assert!(matches!(
        read_request(&mut r).await,
        Err(ParseError::MalformedStartLine)
    ));
}

#[test]
fn test_bad_request_reasons() {
    assert_eq!(ParseError::MalformedStartLine.bad_request_reason(), Some("Invalid start line"));
    assert_eq!(ParseError::MalformedHeaderBlock.bad_request_reason(), Some("Invalid headers"));
    assert_eq!(
        ParseError::InvalidContentLength.bad_request_reason(),
        Some("Invalid Content-Length")
    );
    assert_eq!(ParseError::IncompleteBody.bad_request_reason(), Some("Could not read body"));
    assert_eq!(ParseError::EndOfStream.bad_request_reason(), None);

    let io = ParseError::from(std::io::Error::other("reset"));
    assert_eq!(io.bad_request_reason(), None);
    assert!(std::error::Error::source(&io).is_some());
}
