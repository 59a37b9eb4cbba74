//! HTTP transport — axum routes over a [`PostRepository`].
//!
//! ## Routes
//!
//! - `GET /health` — `{ "status": "ok" }`
//! - `GET /posts` — every post, insertion order
//! - `GET /posts/:id` — one post, 404 if missing
//! - `POST /posts` — create, 201 with the stored post
//! - `PUT /posts/:id` — overwrite supplied fields, 200 with the full post
//! - `DELETE /posts/:id` — 204, empty body
//! - `POST /echo` — `{ "echoed": <body> }`
//!
//! All `/posts` routes accept `?error_scenario=` (see [`crate::scenario`]).
//!
//! ## Example
//!
//! ```ignore
//! use posts_mock_server::{http, InMemoryPostRepository, DEFAULT_STALL};
//!
//! let state = http::AppState::new(InMemoryPostRepository::seeded(), DEFAULT_STALL);
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, "127.0.0.1:8000".parse()?).await?;
//! ```

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::repository::PostRepository;
use crate::scenario::{Interception, ScenarioQuery};

pub use error::ApiError;

/// Shared handler state: the repository and the `timeout` stall duration.
pub struct AppState<R> {
    repo: Arc<R>,
    stall: Duration,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            stall: self.stall,
        }
    }
}

impl<R: PostRepository> AppState<R> {
    pub fn new(repo: R, stall: Duration) -> Self {
        Self {
            repo: Arc::new(repo),
            stall,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Apply the request's directive. A forced failure comes back as `Err`;
    /// a stall sleeps without holding any repository lock and then lets the
    /// request continue.
    pub(crate) async fn intercept(&self, scenario: &ScenarioQuery) -> Result<(), ApiError> {
        match scenario.interception() {
            Interception::Proceed => Ok(()),
            Interception::Fail(failure) => {
                warn!(directive = ?scenario.error_scenario, %failure, "forcing failure");
                Err(ApiError::Forced(failure))
            }
            Interception::Stall => {
                warn!(stall = ?self.stall, "stalling request");
                tokio::time::sleep(self.stall).await;
                Ok(())
            }
        }
    }
}

/// Build the axum `Router` with permissive CORS and request tracing.
pub fn router<R: PostRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/posts",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route(
            "/posts/:id",
            get(handlers::get_post::<R>)
                .put(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .route("/echo", post(handlers::echo))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router at `addr` until Ctrl-C.
pub async fn serve<R: PostRepository + 'static>(
    state: AppState<R>,
    addr: SocketAddr,
) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            warn!(%err, "could not listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
