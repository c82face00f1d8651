//! rawhttp - HTTP/1.1 built directly on TCP
//!
//! Parses requests, routes them and serializes responses without an HTTP
//! library in between.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
