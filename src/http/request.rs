use std::collections::HashMap;

/// Request headers keyed by lower-cased, trimmed name.
///
/// Names are normalized on both insert and lookup, so callers can use any
/// casing. Values are kept as the raw bytes the client sent, trimmed of
/// surrounding ASCII whitespace. Inserting an existing name replaces the
/// previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    map: HashMap<String, Vec<u8>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        self.map
            .insert(normalize(name.as_ref()), value.as_ref().trim_ascii().to_vec());
    }

    /// The value as text, or `None` if it is missing or not valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_bytes(name).and_then(|v| std::str::from_utf8(v).ok())
    }

    pub fn get_bytes(&self, name: &str) -> Option<&[u8]> {
        self.map.get(&normalize(name.as_bytes())).map(|v| v.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&normalize(name.as_bytes()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

fn normalize(name: &[u8]) -> String {
    String::from_utf8_lossy(name.trim_ascii()).to_ascii_lowercase()
}

/// A fully read HTTP request.
///
/// `method`, `path` and `version` are kept exactly as they appeared on the
/// start line. `body` holds exactly `Content-Length` bytes, or nothing when
/// the header was absent.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request method token (e.g. "GET"), not validated
    pub method: String,
    /// The raw request target (e.g. "/hello")
    pub path: String,
    /// The raw version token (typically "HTTP/1.1")
    pub version: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<String>,
    path: Option<String>,
    version: Option<String>,
    headers: Headers,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: &str, value: impl AsRef<[u8]>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// The raw `Content-Type` header, if the client sent one.
    pub fn content_type(&self) -> Option<&[u8]> {
        self.headers.get_bytes("content-type")
    }
}
