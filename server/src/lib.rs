//! HTTP surface of the todo service.
//!
//! # Overview
//! `app` builds the axum router over a `TodoService`; `run` and `run_until`
//! serve it on a bound listener. The binary wires these to a `MongoStore`,
//! while tests use `MemoryStore`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mongo;

use std::future::Future;

use axum::{
    routing::{delete, get},
    Router,
};
use todo_core::{TodoService, TodoStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::ApiError;
pub use mongo::MongoStore;

pub fn app<S: TodoStore>(service: TodoService<S>) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route("/todos/{id}", delete(handlers::delete_todo::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(service)
}

/// Serve until the listener fails.
pub async fn run<S: TodoStore>(
    listener: TcpListener,
    service: TodoService<S>,
) -> Result<(), std::io::Error> {
    run_until(listener, service, std::future::pending()).await
}

/// Serve until `signal` resolves, then drain in-flight requests.
pub async fn run_until<S, F>(
    listener: TcpListener,
    service: TodoService<S>,
    signal: F,
) -> Result<(), std::io::Error>
where
    S: TodoStore,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("listening on http://{addr}");
    }
    axum::serve(listener, app(service))
        .with_graceful_shutdown(signal)
        .await
}

/// Initialize the tracing subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,todo_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(%err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    info!("shutdown signal received");
}
