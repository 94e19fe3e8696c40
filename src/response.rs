//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.

use bytes::Bytes;
use http::StatusCode;
use http::header::{CONTENT_LENGTH, HeaderValue};
use http_body_util::Full;

/// An outgoing HTTP response.
///
/// The mirror sets no headers beyond `content-length` — what the client
/// receives is the status line and the raw body bytes.
///
/// ```rust
/// use ekko::{Response, StatusCode};
///
/// Response::ok("<html>…</html>");
/// Response::with_status(StatusCode::FORBIDDEN, "Not found");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    /// `200 OK` with `body`.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    /// Arbitrary status with `body`.
    pub fn with_status(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self { status, body: body.into() }
    }

    /// Status only, empty body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, body: Bytes::new() }
    }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let length = self.body.len();
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        res.headers_mut().insert(CONTENT_LENGTH, HeaderValue::from(length));
        res
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Handlers may return anything implementing this trait; implement it on
/// your own types to return them directly.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::ok(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::ok(self)
    }
}

/// Return a bare [`StatusCode`] from a handler for a body-less response.
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}
