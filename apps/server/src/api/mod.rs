//! API endpoints.

pub mod films;
pub mod users;

use axum::{
    routing::{get, put},
    Router,
};
use catalog_store::{FilmStore, UserStore};

use crate::state::SharedState;

/// Creates the API router with all endpoints.
pub fn create_router<F, U>() -> Router<SharedState<F, U>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Router::new()
        // Film endpoints
        .route(
            "/films",
            get(films::get_all).post(films::add_film).put(films::update_film),
        )
        .route("/films/popular", get(films::get_most_popular))
        .route("/films/{id}", get(films::get_film))
        .route(
            "/films/{id}/like/{user_id}",
            put(films::add_like).delete(films::remove_like),
        )
        // User endpoints
        .route(
            "/users",
            get(users::get_all).post(users::add_user).put(users::update_user),
        )
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}/friends", get(users::get_friends))
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(users::get_common_friends),
        )
        .route(
            "/users/{id}/friends/{friend_id}",
            put(users::add_friend).delete(users::delete_friend),
        )
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
