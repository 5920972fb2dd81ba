// Connection handling module
// Accepts inbound connections and serves each one on its own task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};

use crate::handler::Router;
use crate::logger;

/// Run the accept loop until the process exits.
///
/// Each accepted connection is served concurrently; handlers coordinate
/// through nothing but the immutable router.
pub async fn run(
    listener: TcpListener,
    router: Arc<Router>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &router),
            Err(err) => {
                logger::log_error(&format!("Failed to accept connection: {err}"));
            }
        }
    }
}

/// Serve a single connection on a spawned task.
///
/// Wraps the TCP stream in `TokioIo`, serves HTTP/1.1 with keep-alive, and
/// dispatches every request through the router.
fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, router: &Arc<Router>) {
    if router.access_log() {
        logger::log_connection_accepted(&peer_addr);
    }

    let router = Arc::clone(router);
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&router);
                async move { router.dispatch(req, peer_addr).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
