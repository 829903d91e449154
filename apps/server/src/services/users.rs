//! User service: CRUD, friendships, and friend queries.

use std::sync::Arc;

use catalog_store::{StoreError, StoreResult, UserStore};
use entities::User;

/// Orchestrates user operations over the user store.
pub struct UserService<U> {
    users: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserStore,
{
    /// Creates a new user service.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Gets a user by id.
    pub async fn get_user(&self, id: u64) -> StoreResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    /// Returns all users.
    pub async fn get_all(&self) -> StoreResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Adds a new user. A blank display name defaults to the login.
    pub async fn add_user(&self, mut user: User) -> StoreResult<User> {
        default_name(&mut user);
        let user = self.users.create(user).await?;
        tracing::info!(user_id = user.id, "user added");
        Ok(user)
    }

    /// Updates a user. The stored friend set is preserved; friendships only
    /// change through [`add_friend`](Self::add_friend) and
    /// [`delete_friend`](Self::delete_friend). The whole replacement happens
    /// under one store lock hold, so a concurrent friend-add cannot be lost.
    pub async fn update_user(&self, mut user: User) -> StoreResult<User> {
        default_name(&mut user);
        let id = user.id;
        let user = self
            .users
            .modify(id, move |stored| {
                let friends = std::mem::take(&mut stored.friend_ids);
                *stored = user;
                stored.friend_ids = friends;
            })
            .await?;
        tracing::info!(user_id = id, "user updated");
        Ok(user)
    }

    /// Adds `friend_id` to user `id`'s friend set. Directional: `friend_id`'s
    /// own set is untouched. Idempotent; `NotFound` when either id is unknown.
    pub async fn add_friend(&self, id: u64, friend_id: u64) -> StoreResult<()> {
        self.require_user(friend_id).await?;
        self.users
            .modify(id, move |user| {
                user.friend_ids.insert(friend_id);
            })
            .await?;
        tracing::info!(user_id = id, friend_id, "friend added");
        Ok(())
    }

    /// Removes `friend_id` from user `id`'s friend set. Removing an absent
    /// friendship is a no-op; an unknown id is still `NotFound`.
    pub async fn delete_friend(&self, id: u64, friend_id: u64) -> StoreResult<()> {
        self.require_user(friend_id).await?;
        self.users
            .modify(id, move |user| {
                user.friend_ids.remove(&friend_id);
            })
            .await?;
        tracing::info!(user_id = id, friend_id, "friend removed");
        Ok(())
    }

    /// Resolves user `id`'s friend set to full user records, ascending by id.
    pub async fn get_friends(&self, id: u64) -> StoreResult<Vec<User>> {
        let user = self.get_user(id).await?;
        self.resolve(user.friend_ids.iter().copied()).await
    }

    /// Resolves the intersection of two users' friend sets to full records.
    pub async fn get_common_friends(&self, id: u64, other_id: u64) -> StoreResult<Vec<User>> {
        let user = self.get_user(id).await?;
        let other = self.get_user(other_id).await?;
        let common = user.friend_ids.intersection(&other.friend_ids).copied();
        self.resolve(common).await
    }

    async fn resolve(&self, ids: impl Iterator<Item = u64>) -> StoreResult<Vec<User>> {
        let mut users = Vec::new();
        for id in ids {
            // friend ids always point at existing users: entities are never
            // deleted, and membership was checked on insertion
            if let Some(user) = self.users.find_by_id(id).await? {
                users.push(user);
            }
        }
        Ok(users)
    }

    async fn require_user(&self, id: u64) -> StoreResult<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(StoreError::not_found("user", id));
        }
        Ok(())
    }
}

/// A blank or absent display name falls back to the login.
fn default_name(user: &mut User) {
    if user.name.trim().is_empty() {
        user.name = user.login.clone();
    }
}
