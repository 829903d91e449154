//! User API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use catalog_store::{FilmStore, UserStore};
use entities::{validate_user, User};

use crate::error::ServerResult;
use crate::state::SharedState;

/// `GET /users` — lists all users.
pub async fn get_all<F, U>(State(state): State<SharedState<F, U>>) -> ServerResult<Json<Vec<User>>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.users.get_all().await?))
}

/// `GET /users/{id}` — fetches one user.
pub async fn get_user<F, U>(
    State(state): State<SharedState<F, U>>,
    Path(id): Path<u64>,
) -> ServerResult<Json<User>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.users.get_user(id).await?))
}

/// `POST /users` — validates and creates a user.
pub async fn add_user<F, U>(
    State(state): State<SharedState<F, U>>,
    Json(user): Json<User>,
) -> ServerResult<Json<User>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    validate_user(&user)?;
    Ok(Json(state.users.add_user(user).await?))
}

/// `PUT /users` — validates and updates a user; 404 when the id is unknown.
pub async fn update_user<F, U>(
    State(state): State<SharedState<F, U>>,
    Json(user): Json<User>,
) -> ServerResult<Json<User>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    validate_user(&user)?;
    Ok(Json(state.users.update_user(user).await?))
}

/// `PUT /users/{id}/friends/{friend_id}` — adds a directed friendship.
pub async fn add_friend<F, U>(
    State(state): State<SharedState<F, U>>,
    Path((id, friend_id)): Path<(u64, u64)>,
) -> ServerResult<StatusCode>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    state.users.add_friend(id, friend_id).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /users/{id}/friends/{friend_id}` — removes a friendship.
pub async fn delete_friend<F, U>(
    State(state): State<SharedState<F, U>>,
    Path((id, friend_id)): Path<(u64, u64)>,
) -> ServerResult<StatusCode>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    state.users.delete_friend(id, friend_id).await?;
    Ok(StatusCode::OK)
}

/// `GET /users/{id}/friends` — lists a user's friends.
pub async fn get_friends<F, U>(
    State(state): State<SharedState<F, U>>,
    Path(id): Path<u64>,
) -> ServerResult<Json<Vec<User>>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.users.get_friends(id).await?))
}

/// `GET /users/{id}/friends/common/{other_id}` — friends both users share.
pub async fn get_common_friends<F, U>(
    State(state): State<SharedState<F, U>>,
    Path((id, other_id)): Path<(u64, u64)>,
) -> ServerResult<Json<Vec<User>>>
where
    F: FilmStore + 'static,
    U: UserStore + 'static,
{
    Ok(Json(state.users.get_common_friends(id, other_id).await?))
}
