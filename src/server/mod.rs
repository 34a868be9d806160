//! Bundled demo JSON API.
//!
//! A handful of fixed routes so the fetch window has something local to
//! talk to. `run` starts it on a background thread, `serve` in the
//! foreground.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread;

use axum::extract::{Path, Query};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to spawn the server thread: {0}")]
    Thread(#[source] io::Error),

    #[error("server thread exited before it was ready")]
    NotReady,

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] io::Error),
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/items/{item_id}", get(read_item))
        .route("/users", post(create_user))
}

async fn root() -> Json<Value> {
    debug!("GET /");
    Json(json!({ "message": "Hello World" }))
}

async fn read_item(Path(item_id): Path<i64>) -> Json<Value> {
    debug!(item_id, "GET /items");
    Json(json!({ "item_id": item_id }))
}

#[derive(Debug, Deserialize)]
struct NewUser {
    name: String,
}

async fn create_user(Query(user): Query<NewUser>) -> Json<Value> {
    debug!(name = %user.name, "POST /users");
    Json(json!({ "name": user.name }))
}

/// A bound, not yet serving, demo API.
pub struct DemoServer {
    listener: TcpListener,
    addr: SocketAddr,
}

pub async fn bind(addr: SocketAddr) -> Result<DemoServer, ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;

    Ok(DemoServer { listener, addr })
}

impl DemoServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn serve_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(address = %self.addr, "demo API listening");
        axum::serve(self.listener, router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }
}

/// Start the demo API on its own runtime thread and return once it is bound.
///
/// The thread lives until the process exits.
pub fn spawn_background(addr: SocketAddr) -> Result<SocketAddr, ServerError> {
    let (ready_tx, ready_rx) = mpsc::channel();

    thread::Builder::new()
        .name("demo-api".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = ready_tx.send(Err(ServerError::Runtime(err)));
                    return;
                }
            };

            runtime.block_on(async move {
                let server = match bind(addr).await {
                    Ok(server) => server,
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(server.local_addr()));

                if let Err(err) = server.serve_until(std::future::pending()).await {
                    error!(error = %err, "demo API stopped");
                }
            });
        })
        .map_err(ServerError::Thread)?;

    ready_rx.recv().map_err(|_| ServerError::NotReady)?
}
