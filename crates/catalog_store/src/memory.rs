//! In-memory store implementations.
//!
//! Each store guards its id counter and entity map behind a single `RwLock`,
//! so id assignment and map mutation are atomic per operation. Ids are
//! assigned sequentially starting at 1 and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use entities::{Film, User};
use tokio::sync::RwLock;

use crate::{FilmStore, StoreError, StoreResult, UserStore};

/// An id-keyed entity table with a monotonic id counter.
///
/// `BTreeMap` keeps `all()` in ascending id order, which makes listing and
/// popularity tie-breaking deterministic.
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn insert_new(&mut self, value: T, set_id: impl FnOnce(&mut T, u64)) -> T {
        self.next_id += 1;
        let mut value = value;
        set_id(&mut value, self.next_id);
        self.rows.insert(self.next_id, value.clone());
        value
    }

    fn replace(&mut self, id: u64, value: T) -> Option<T> {
        if !self.rows.contains_key(&id) {
            return None;
        }
        self.rows.insert(id, value.clone());
        Some(value)
    }

    fn modify(&mut self, id: u64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }
}

/// In-memory film store.
#[derive(Debug, Default)]
pub struct MemoryFilmStore {
    films: RwLock<Table<Film>>,
}

impl MemoryFilmStore {
    /// Creates an empty in-memory film store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilmStore for MemoryFilmStore {
    async fn find_all(&self) -> StoreResult<Vec<Film>> {
        Ok(self.films.read().await.all())
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Film>> {
        Ok(self.films.read().await.get(id))
    }

    async fn create(&self, film: Film) -> StoreResult<Film> {
        let mut films = self.films.write().await;
        Ok(films.insert_new(film, |f, id| f.id = id))
    }

    async fn update(&self, film: Film) -> StoreResult<Film> {
        let mut films = self.films.write().await;
        let id = film.id;
        films
            .replace(id, film)
            .ok_or_else(|| StoreError::not_found("film", id))
    }

    async fn modify<M>(&self, id: u64, apply: M) -> StoreResult<Film>
    where
        M: FnOnce(&mut Film) + Send,
    {
        let mut films = self.films.write().await;
        films
            .modify(id, apply)
            .ok_or_else(|| StoreError::not_found("film", id))
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Table<User>>,
}

impl MemoryUserStore {
    /// Creates an empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.read().await.all())
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn create(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        Ok(users.insert_new(user, |u, id| u.id = id))
    }

    async fn update(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        let id = user.id;
        users
            .replace(id, user)
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    async fn modify<M>(&self, id: u64, apply: M) -> StoreResult<User>
    where
        M: FnOnce(&mut User) + Send,
    {
        let mut users = self.users.write().await;
        users
            .modify(id, apply)
            .ok_or_else(|| StoreError::not_found("user", id))
    }
}
