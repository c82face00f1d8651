//! Request routing.
//!
//! ```text
//! Request → route(method, path) → Handler → Response
//! ```
//!
//! Routes match on exact method and path equality. Anything that does not
//! match falls through to the not-found handler.

pub mod handlers;

use crate::http::request::Request;
use crate::http::response::Response;

/// A handler receives a Request and returns a Response.
pub type Handler = fn(&Request) -> Response;

/// Picks the handler for `(method, path)`.
pub fn route(method: &str, path: &str) -> Handler {
    match (method, path) {
        ("GET", "/") => handlers::home,
        ("GET", "/hello") => handlers::hello,
        ("POST", "/echo") => handlers::echo,
        _ => handlers::not_found,
    }
}

/// Routes `req` and runs the selected handler.
pub fn dispatch(req: &Request) -> Response {
    route(&req.method, &req.path)(req)
}
