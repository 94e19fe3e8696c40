//! Registration-order request router.
//!
//! A router is a list of `(path, handler)` entries plus a mandatory
//! catch-all. Lookup walks the list in registration order and takes the
//! first exact path match; the catch-all answers everything else. Matching
//! considers the path component only — method and query string play no
//! part in routing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Handler trait and type erasure ────────────────────────────────────────────

/// A heap-allocated, type-erased future resolving to a [`Response`].
pub(crate) type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// signature of [`Handler::into_boxed`]. External crates cannot usefully
/// implement it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> HandlerFuture;
}

/// A type-erased handler shared across concurrent connection tasks.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler — any `async fn` of the shape:
///
/// ```text
/// async fn name(req: Request) -> impl IntoResponse
/// ```
///
/// You never implement this yourself. The trait is sealed: only the
/// blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Bridges a concrete handler fn to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> HandlerFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// The routing table.
///
/// ```rust
/// use ekko::{Router, handlers};
///
/// let router = Router::new(handlers::deny)
///     .on("/sms", handlers::echo);
/// ```
pub struct Router {
    routes: Vec<(String, BoxedHandler)>,
    fallback: BoxedHandler,
}

impl Router {
    /// Creates a router. `fallback` answers every request no registered
    /// route matches — the catch-all is part of construction, so a router
    /// without one cannot exist.
    pub fn new(fallback: impl Handler) -> Self {
        Self { routes: Vec::new(), fallback: fallback.into_boxed() }
    }

    /// Registers `handler` for requests whose path is exactly `path`, any
    /// method. Entries are tried in registration order and the first match
    /// wins. Returns `self` for chaining.
    pub fn on(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes.push((path.to_owned(), handler.into_boxed()));
        self
    }

    pub(crate) fn lookup(&self, path: &str) -> BoxedHandler {
        self.routes
            .iter()
            .find(|(route, _)| route.as_str() == path)
            .map(|(_, handler)| Arc::clone(handler))
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }
}
