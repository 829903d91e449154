//! Application state.

use std::sync::Arc;

use catalog_store::{FilmStore, UserStore};

use crate::config::Config;
use crate::services::{FilmService, UserService};

/// Shared application state: configuration plus the two domain services.
pub struct AppState<F, U> {
    /// Server configuration.
    pub config: Config,
    /// Film service.
    pub films: FilmService<F, U>,
    /// User service.
    pub users: UserService<U>,
}

impl<F, U> AppState<F, U>
where
    F: FilmStore,
    U: UserStore,
{
    /// Creates new application state, wiring both services to the stores.
    /// The user store is shared: the film service consults it to check that
    /// liking users exist.
    pub fn new(config: Config, film_store: F, user_store: U) -> Self {
        let film_store = Arc::new(film_store);
        let user_store = Arc::new(user_store);
        Self {
            config,
            films: FilmService::new(film_store, Arc::clone(&user_store)),
            users: UserService::new(user_store),
        }
    }
}

/// Type alias for shared state.
pub type SharedState<F, U> = Arc<AppState<F, U>>;

/// Creates shared state from config and stores.
pub fn create_shared_state<F, U>(config: Config, film_store: F, user_store: U) -> SharedState<F, U>
where
    F: FilmStore,
    U: UserStore,
{
    Arc::new(AppState::new(config, film_store, user_store))
}
