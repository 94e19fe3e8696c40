//! The ekko binary: a request mirror on loopback port 8080.
//!
//! Try:
//!   curl 'http://127.0.0.1:8080/sms?name=Alice'
//!   curl -X POST http://127.0.0.1:8080/sms \
//!        -H 'content-type: text/plain' \
//!        -d 'a=1'
//!   curl http://127.0.0.1:8080/anything-else   # 403

use ekko::{Config, Router, Server, handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let router = Router::new(handlers::deny)
        .on("/sms", handlers::echo);

    let server = Server::bind(Config::default())
        .await
        .expect("failed to bind");

    server.serve(router).await.expect("server error");
}
