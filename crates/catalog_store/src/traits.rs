//! Store trait definitions.

use async_trait::async_trait;
use entities::{Film, User};

use crate::StoreResult;

/// Trait for film storage.
///
/// Stores own identity assignment and nothing else: no existence checks on
/// foreign ids, no derived queries. Lookup misses surface as `Ok(None)`.
#[async_trait]
pub trait FilmStore: Send + Sync {
    /// Returns every stored film, in ascending id order.
    async fn find_all(&self) -> StoreResult<Vec<Film>>;

    /// Gets a film by id, or `None` if no film has that id.
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Film>>;

    /// Stores a new film. Any id on the input is ignored; the store assigns
    /// the next sequential id (starting at 1) and returns the film with it.
    async fn create(&self, film: Film) -> StoreResult<Film>;

    /// Replaces the stored film with the same id wholesale.
    /// Fails with `NotFound` if the id is unknown.
    async fn update(&self, film: Film) -> StoreResult<Film>;

    /// Applies `apply` to the stored film with the write lock held for the
    /// whole call, so concurrent mutations of the same film cannot lose
    /// updates. Returns the film after mutation; fails with `NotFound` if
    /// the id is unknown.
    async fn modify<M>(&self, id: u64, apply: M) -> StoreResult<Film>
    where
        M: FnOnce(&mut Film) + Send;
}

/// Trait for user storage. Same contract shape as [`FilmStore`].
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every stored user, in ascending id order.
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Gets a user by id, or `None` if no user has that id.
    async fn find_by_id(&self, id: u64) -> StoreResult<Option<User>>;

    /// Stores a new user under a freshly assigned id.
    async fn create(&self, user: User) -> StoreResult<User>;

    /// Replaces the stored user with the same id wholesale.
    /// Fails with `NotFound` if the id is unknown.
    async fn update(&self, user: User) -> StoreResult<User>;

    /// Applies `apply` to the stored user with the write lock held for the
    /// whole call. Returns the user after mutation; fails with `NotFound`
    /// if the id is unknown.
    async fn modify<M>(&self, id: u64, apply: M) -> StoreResult<User>
    where
        M: FnOnce(&mut User) + Send;
}
