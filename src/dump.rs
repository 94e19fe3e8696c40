//! Request rendering — the actual mirror.
//!
//! [`render`] turns an inbound request into an HTML page:
//!
//! ```text
//! <html><body><b>Request</b><br/><pre>GET /sms?name=Alice HTTP/1.1
//! accept: */*
//! host: 127.0.0.1:8080
//! name=Alice
//! </pre></body></html>
//! ```
//!
//! Determinism is the point: headers render sorted by name, query
//! parameters sorted by key, and repeated runs of the same request produce
//! byte-identical output. Header names appear in their canonical lowercase
//! form. The body is only pulled off the wire when a `content-type` header
//! announces one; a request without it never triggers a body read.

use std::collections::BTreeMap;

use http::HeaderMap;
use http::header::CONTENT_TYPE;

use crate::request::Request;

/// Renders `req` as an HTML dump.
///
/// Sections, in order: request line, headers (sorted by name), body
/// followed by a blank line (only when `content-type` is present), query
/// parameters one per line as `key=value`.
pub async fn render(req: &mut Request) -> String {
    let mut out = String::from("<html><body><b>Request</b><br/><pre>");

    out.push_str(&format!("{} {} {}\n", req.method(), req.uri(), req.protocol()));
    out.push_str(&header_lines(req.headers()));

    if req.headers().contains_key(CONTENT_TYPE) {
        let body = req.read_body().await;
        out.push_str(&body.as_text());
        out.push_str("\n\n");
    }

    out.push_str(&query_lines(req.query()));
    out.push_str("</pre></body></html>");
    out
}

/// Decodes a query string into a key → value map.
///
/// Splits on `&`, then on the first `=` of each pair: `a=b=c` maps `a` to
/// `b=c`, a bare `flag` maps to the empty string. Later occurrences of a
/// key overwrite earlier ones. No percent-decoding — the mirror shows the
/// wire form, not an interpretation of it.
pub fn parse_query(query: Option<&str>) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return vars;
    };
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key.to_owned(), value.to_owned()),
            None => (pair.to_owned(), String::new()),
        };
        vars.insert(key, value);
    }
    vars
}

/// One `name: values` line per header name, names sorted ascending.
///
/// Repeated names collapse to a single line with their values run
/// together, no separator between them.
fn header_lines(headers: &HeaderMap) -> String {
    let mut by_name: BTreeMap<&str, String> = BTreeMap::new();
    for (name, value) in headers {
        by_name
            .entry(name.as_str())
            .or_default()
            .push_str(&String::from_utf8_lossy(value.as_bytes()));
    }

    let mut out = String::new();
    for (name, values) in by_name {
        out.push_str(&format!("{name}: {values}\n"));
    }
    out
}

/// One `key=value` line per query parameter, nothing for an empty query.
fn query_lines(query: Option<&str>) -> String {
    let mut out = String::new();
    for (key, value) in parse_query(query) {
        out.push_str(&format!("{key}={value}\n"));
    }
    out
}
