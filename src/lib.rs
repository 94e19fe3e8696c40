//! # ekko
//!
//! A loopback HTTP request mirror. Point any client at it and read back
//! what actually went over the wire: request line, headers, body, and
//! decoded query parameters, wrapped in just enough HTML to open in a
//! browser.
//!
//! ## The contract
//!
//! ekko answers one question — *what did my client send?* — and refuses to
//! grow past it. One route mirrors the request; every other path gets a
//! flat `403 Forbidden`. No state survives a request, nothing is
//! persisted, and the only knob is the bind address.
//!
//! What ekko deliberately skips:
//!
//! - **TLS** — it binds to loopback; traffic never leaves the machine
//! - **Authentication** — the caller owns both ends of the connection
//! - **Body-size limits** — requests come from your own tooling, not the
//!   open internet
//! - **Content-type-aware parsing** — the body is mirrored as text, never
//!   interpreted
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ekko::{Config, Router, Server, handlers};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::new(handlers::deny)
//!         .on("/sms", handlers::echo);
//!
//!     let server = Server::bind(Config::default()).await.expect("bind failed");
//!     server.serve(router).await.expect("server error");
//! }
//! ```
//!
//! Custom handlers are plain `async fn`s returning anything that
//! implements [`IntoResponse`]:
//!
//! ```rust
//! use ekko::{Request, Response, StatusCode};
//!
//! async fn teapot(_req: Request) -> Response {
//!     Response::with_status(StatusCode::IM_A_TEAPOT, "short and stout")
//! }
//! ```

mod config;
mod error;
mod request;
mod response;
mod router;
mod server;

pub mod dump;
pub mod handlers;

pub use config::Config;
pub use error::Error;
pub use request::{BodyRead, Request};
pub use response::{IntoResponse, Response};
pub use router::{Handler, Router};
pub use server::Server;

pub use http::StatusCode;
