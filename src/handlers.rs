//! Built-in route handlers.
//!
//! The two behaviors the mirror ships with:
//!
//! | Handler | Typical route | Response |
//! |---|---|---|
//! | [`echo`] | `/sms` | `200`, HTML dump of the request |
//! | [`deny`] | catch-all | `403`, body `"Not found"` |
//!
//! ```rust
//! use ekko::{Router, handlers};
//!
//! let router = Router::new(handlers::deny)
//!     .on("/sms", handlers::echo);
//! ```

use http::StatusCode;

use crate::dump;
use crate::request::Request;
use crate::response::Response;

/// Mirrors the request back at the caller as an HTML page.
///
/// Always `200`, whatever the method or body. See [`dump::render`] for the
/// exact page layout.
pub async fn echo(mut req: Request) -> Response {
    Response::ok(dump::render(&mut req).await)
}

/// Rejects with `403 Forbidden` and the body `"Not found"`.
///
/// Intended as the router's catch-all: anything not explicitly mirrored is
/// refused, whatever the method, headers, or body.
pub async fn deny(_req: Request) -> Response {
    Response::with_status(StatusCode::FORBIDDEN, "Not found")
}
