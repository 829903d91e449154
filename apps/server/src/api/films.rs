//! Film API endpoints.
//!
//! Handlers validate incoming bodies before touching a service; a record
//! that fails validation is rejected with 400 and never reaches the stores.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_store::{FilmStore, UserStore};
use entities::{validate_film, Film};
use serde::Deserialize;

use crate::error::ServerResult;
use crate::state::SharedState;

/// Default number of films returned by the popularity endpoint.
const DEFAULT_POPULAR_COUNT: usize = 10;

/// Query parameters for `GET /films/popular`.
#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    count: Option<usize>,
}

/// `GET /films` — lists all films.
pub async fn get_all<F, U>(State(state): State<SharedState<F, U>>) -> ServerResult<Json<Vec<Film>>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.films.get_all().await?))
}

/// `GET /films/{id}` — fetches one film.
pub async fn get_film<F, U>(
    State(state): State<SharedState<F, U>>,
    Path(id): Path<u64>,
) -> ServerResult<Json<Film>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.films.get_film(id).await?))
}

/// `POST /films` — validates and creates a film.
pub async fn add_film<F, U>(
    State(state): State<SharedState<F, U>>,
    Json(film): Json<Film>,
) -> ServerResult<Json<Film>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    validate_film(&film)?;
    Ok(Json(state.films.add_film(film).await?))
}

/// `PUT /films` — validates and updates a film; 404 when the id is unknown.
pub async fn update_film<F, U>(
    State(state): State<SharedState<F, U>>,
    Json(film): Json<Film>,
) -> ServerResult<Json<Film>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    validate_film(&film)?;
    Ok(Json(state.films.update_film(film).await?))
}

/// `PUT /films/{id}/like/{user_id}` — records a like.
pub async fn add_like<F, U>(
    State(state): State<SharedState<F, U>>,
    Path((film_id, user_id)): Path<(u64, u64)>,
) -> ServerResult<StatusCode>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    state.films.add_like(film_id, user_id).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /films/{id}/like/{user_id}` — removes a like.
pub async fn remove_like<F, U>(
    State(state): State<SharedState<F, U>>,
    Path((film_id, user_id)): Path<(u64, u64)>,
) -> ServerResult<StatusCode>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    state.films.remove_like(film_id, user_id).await?;
    Ok(StatusCode::OK)
}

/// `GET /films/popular?count=N` — most liked films, default 10.
pub async fn get_most_popular<F, U>(
    State(state): State<SharedState<F, U>>,
    Query(query): Query<PopularQuery>,
) -> ServerResult<Json<Vec<Film>>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    let count = query.count.unwrap_or(DEFAULT_POPULAR_COUNT);
    Ok(Json(state.films.get_most_popular(count).await?))
}
