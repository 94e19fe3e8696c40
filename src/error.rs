//! Unified error type.

use std::fmt;
use std::io;
use std::net::SocketAddr;

/// The error type for ekko's fallible operations.
///
/// Application-level outcomes (the `403` catch-all, the mirrored dump) are
/// ordinary [`Response`](crate::Response) values. `Error` surfaces
/// infrastructure failures only — today that means claiming the listening
/// socket.
#[derive(Debug)]
pub struct Error {
    context: String,
    source: io::Error,
}

impl Error {
    pub(crate) fn bind(addr: SocketAddr, source: io::Error) -> Self {
        Self { context: format!("bind {addr}"), source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
