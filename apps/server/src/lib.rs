//! Filmgraph HTTP server.
//!
//! A small social film catalog: films and users, likes and friendships, and
//! the derived views over them (most-popular films, friend lists, common
//! friends). The HTTP layer validates at the boundary and delegates to the
//! domain services; all state lives in the in-memory stores.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use axum::Router;
use catalog_store::{FilmStore, UserStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::SharedState;

/// Creates the application router with all routes configured.
pub fn create_app<F, U>(state: SharedState<F, U>) -> Router
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
