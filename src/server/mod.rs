// Server module entry
// Listener binding and the accept loop shared by every decision endpoint

pub mod handler;

// Re-export the request entry point
pub use handler::handle_request;

use std::net::SocketAddr;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::logger;
use crate::policy::DecisionMode;

/// TCP port every decision server binds.
pub const DECISION_PORT: u16 = 8181;

/// The single route the decision API answers.
pub const DECISION_PATH: &str = "/v1/data/rbac/allow";

/// Bind a listener on all interfaces at the given port.
///
/// A plain bind: decision servers never share a port, so a taken port is
/// an error that propagates and fails startup.
pub async fn bind(port: u16) -> std::io::Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            Err(e)
        }
    }
}

/// Serve the decision endpoint forever.
///
/// Announces the listening address once, then accepts connections in a
/// loop. Accept errors are logged and skipped; per-connection errors only
/// affect their own task.
pub async fn serve(listener: TcpListener, mode: DecisionMode) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    logger::log_server_start(&addr);

    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                handle_connection(stream, mode);
            }
            Err(e) => {
                logger::log_accept_error(&e);
            }
        }
    }
}

/// Handle a single connection in a spawned task.
///
/// Wraps the TCP stream in `TokioIo` and serves it with the HTTP/1.1
/// connection driver and the decision request handler.
fn handle_connection(stream: tokio::net::TcpStream, mode: DecisionMode) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new()
            .serve_connection(io, service_fn(move |req| handler::handle_request(req, mode)));
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
