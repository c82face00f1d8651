//! HTTP/1.1 over a raw byte stream.
//!
//! Each connection carries exactly one request and is closed after the
//! response is written.
//!
//! # Architecture
//!
//! - **`reader`**: pulls one line at a time from a buffered stream
//! - **`parser`**: start line, header block and body, plus `ParseError`
//! - **`request`**: the parsed request and its case-insensitive headers
//! - **`response`**: status codes and the response value
//! - **`writer`**: serializes a response and writes it to the client
//! - **`connection`**: drives one connection through its states
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← start line, headers, body
//!        └──────┬──────┘
//!               │ Request parsed            parse error → Writing (400)
//!               ▼                           end of stream → Closed
//!        ┌──────────────────┐
//!        │   Processing     │ ← route and run the handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! Driving one connection over an in-memory pipe:
//!
//! ```no_run
//! use rawhttp::http::connection::Connection;
//! use tokio::io::{duplex, AsyncReadExt, AsyncWriteExt};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let (mut client, server) = duplex(4096);
//! tokio::spawn(Connection::new(server).run());
//!
//! client.write_all(b"GET /hello HTTP/1.1\r\n\r\n").await?;
//! let mut response = Vec::new();
//! client.read_to_end(&mut response).await?;
//! assert!(response.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
