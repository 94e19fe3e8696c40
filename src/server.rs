//! HTTP listener and per-request dispatch.
//!
//! Binding and serving are separate, explicit steps: [`Server::bind`]
//! claims the socket and can fail, [`Server::serve`] runs the accept loop
//! and does not return. A failed bind is fatal — the process has nothing
//! else to do without its socket.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::Error;
use crate::request::Request;
use crate::router::Router;

/// The HTTP server, bound and ready to serve.
///
/// ```rust,no_run
/// use ekko::{Config, Router, Server, handlers};
///
/// # async fn run() -> Result<(), ekko::Error> {
/// let server = Server::bind(Config::default()).await?;
/// let router = Router::new(handlers::deny).on("/sms", handlers::echo);
/// server.serve(router).await
/// # }
/// ```
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Binds the listener described by `config`.
    ///
    /// With port `0` the OS picks a free port;
    /// [`local_addr`](Server::local_addr) reports the actual one.
    pub async fn bind(config: Config) -> Result<Self, Error> {
        let listener = TcpListener::bind(config.addr)
            .await
            .map_err(|e| Error::bind(config.addr, e))?;
        let addr = listener.local_addr().map_err(|e| Error::bind(config.addr, e))?;
        Ok(Self { listener, addr })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accepts connections forever, dispatching each request through
    /// `router`.
    ///
    /// Accept errors are logged and the loop continues. There is no
    /// shutdown sequence — the process is expected to be killed.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        // Arc so the routing table is shared across connection tasks
        // without copying it.
        let router = Arc::new(router);

        info!(addr = %self.addr, "mirror listening");

        loop {
            let (stream, remote_addr) = match self.listener.accept().await {
                Ok(v) => v,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            let router = Arc::clone(&router);
            // TokioIo adapts tokio's AsyncRead/AsyncWrite to the hyper IO
            // traits.
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // `service_fn` turns a plain async function into a hyper
                // `Service`. The closure runs once per request on the
                // connection, not once per connection.
                let svc = service_fn(move |req| {
                    let router = Arc::clone(&router);
                    async move { dispatch(router, req).await }
                });

                // `auto::Builder` serves both HTTP/1.1 and HTTP/2,
                // whichever the client negotiates.
                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    error!(peer = %remote_addr, "connection error: {e}");
                }
            });
        }
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// The error type is [`Infallible`] — every outcome, including the
/// catch-all rejection, is an ordinary response, so hyper never sees an
/// error from us.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let req = Request::new(req);
    let handler = router.lookup(req.path());
    Ok(handler.call(req).await.into_inner())
}
