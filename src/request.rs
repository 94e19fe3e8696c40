//! Incoming HTTP request type.

use std::borrow::Cow;

use bytes::Bytes;
use http::request::Parts;
use http::{HeaderMap, Method, Uri, Version};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use tracing::warn;

/// An incoming HTTP request.
///
/// Head fields (method, URI, headers) are available immediately; the body
/// stays on the wire until [`read_body`](Request::read_body) drains it.
pub struct Request {
    parts: Parts,
    body: Option<Incoming>,
}

impl Request {
    pub(crate) fn new(req: hyper::Request<Incoming>) -> Self {
        let (parts, body) = req.into_parts();
        Self { parts, body: Some(body) }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(parts: Parts) -> Self {
        Self { parts, body: None }
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// The request target as received: path plus optional query string.
    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.parts.uri.query()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Case-insensitive header lookup. Returns the first value for `name`,
    /// or `None` when absent or not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The protocol version as it appears in a request line.
    pub fn protocol(&self) -> &'static str {
        match self.parts.version {
            Version::HTTP_09 => "HTTP/0.9",
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_11 => "HTTP/1.1",
            Version::HTTP_2 => "HTTP/2.0",
            Version::HTTP_3 => "HTTP/3.0",
            _ => "HTTP",
        }
    }

    /// Reads the body to completion.
    ///
    /// A transport failure mid-read is logged and reported as
    /// [`BodyRead::Failed`]; the caller gets an empty substitute instead of
    /// an error. Calling this a second time yields an empty body.
    pub async fn read_body(&mut self) -> BodyRead {
        let Some(body) = self.body.take() else {
            return BodyRead::Complete(Bytes::new());
        };
        match body.collect().await {
            Ok(collected) => BodyRead::Complete(collected.to_bytes()),
            Err(e) => {
                warn!("request body read failed: {e}");
                BodyRead::Failed
            }
        }
    }
}

/// Outcome of draining a request body.
///
/// `Failed` stands in for whatever could not be read; it renders as an
/// empty string rather than aborting the exchange.
pub enum BodyRead {
    Complete(Bytes),
    Failed,
}

impl BodyRead {
    /// The body as text. Invalid UTF-8 is replaced; a failed read is empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Complete(bytes) => String::from_utf8_lossy(bytes),
            Self::Failed => Cow::Borrowed(""),
        }
    }
}
