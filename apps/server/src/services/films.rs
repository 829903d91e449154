//! Film service: CRUD, likes, and popularity ranking.

use std::sync::Arc;

use catalog_store::{FilmStore, StoreError, StoreResult, UserStore};
use entities::Film;

/// Orchestrates film operations over the film store, consulting the user
/// store to check that liking users exist.
pub struct FilmService<F, U> {
    films: Arc<F>,
    users: Arc<U>,
}

impl<F, U> FilmService<F, U>
where
    F: FilmStore,
    U: UserStore,
{
    /// Creates a new film service.
    pub fn new(films: Arc<F>, users: Arc<U>) -> Self {
        Self { films, users }
    }

    /// Gets a film by id.
    pub async fn get_film(&self, id: u64) -> StoreResult<Film> {
        self.films
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("film", id))
    }

    /// Returns all films.
    pub async fn get_all(&self) -> StoreResult<Vec<Film>> {
        self.films.find_all().await
    }

    /// Adds a new film. Validation has already passed at the boundary.
    pub async fn add_film(&self, film: Film) -> StoreResult<Film> {
        let film = self.films.create(film).await?;
        tracing::info!(film_id = film.id, "film added");
        Ok(film)
    }

    /// Updates a film. The stored like set is preserved; likes only change
    /// through [`add_like`](Self::add_like) and
    /// [`remove_like`](Self::remove_like). The whole replacement happens
    /// under one store lock hold, so a concurrent like cannot be lost.
    pub async fn update_film(&self, film: Film) -> StoreResult<Film> {
        let id = film.id;
        let film = self
            .films
            .modify(id, move |stored| {
                let likes = std::mem::take(&mut stored.liked_user_ids);
                *stored = film;
                stored.liked_user_ids = likes;
            })
            .await?;
        tracing::info!(film_id = id, "film updated");
        Ok(film)
    }

    /// Records that `user_id` likes `film_id`. Idempotent: liking an already
    /// liked film is a no-op. Fails with `NotFound` when either id is unknown.
    pub async fn add_like(&self, film_id: u64, user_id: u64) -> StoreResult<()> {
        self.require_user(user_id).await?;
        self.films
            .modify(film_id, move |film| {
                film.liked_user_ids.insert(user_id);
            })
            .await?;
        tracing::info!(film_id, user_id, "like added");
        Ok(())
    }

    /// Removes `user_id`'s like from `film_id`. Removing an absent like is a
    /// no-op; an unknown film or user id is still `NotFound`.
    pub async fn remove_like(&self, film_id: u64, user_id: u64) -> StoreResult<()> {
        self.require_user(user_id).await?;
        self.films
            .modify(film_id, move |film| {
                film.liked_user_ids.remove(&user_id);
            })
            .await?;
        tracing::info!(film_id, user_id, "like removed");
        Ok(())
    }

    /// Returns up to `count` films ordered by descending like count.
    /// Ties are broken by ascending film id.
    pub async fn get_most_popular(&self, count: usize) -> StoreResult<Vec<Film>> {
        let mut films = self.films.find_all().await?;
        films.sort_by(|a, b| b.like_count().cmp(&a.like_count()).then(a.id.cmp(&b.id)));
        films.truncate(count);
        Ok(films)
    }

    async fn require_user(&self, user_id: u64) -> StoreResult<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(StoreError::not_found("user", user_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use catalog_store::{MemoryFilmStore, MemoryUserStore};
    use chrono::NaiveDate;
    use entities::User;

    use super::*;

    fn service() -> FilmService<MemoryFilmStore, MemoryUserStore> {
        FilmService::new(
            Arc::new(MemoryFilmStore::new()),
            Arc::new(MemoryUserStore::new()),
        )
    }

    fn film(name: &str) -> Film {
        Film::new(name, NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(), 136)
    }

    fn user(login: &str) -> User {
        User::new(
            format!("{login}@example.com"),
            login,
            NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        )
    }

    async fn seed_user(svc: &FilmService<MemoryFilmStore, MemoryUserStore>, login: &str) -> u64 {
        svc.users.create(user(login)).await.unwrap().id
    }

    #[tokio::test]
    async fn test_add_like_is_idempotent() {
        let svc = service();
        let user_id = seed_user(&svc, "joe").await;
        let film_id = svc.add_film(film("The Matrix")).await.unwrap().id;

        svc.add_like(film_id, user_id).await.unwrap();
        svc.add_like(film_id, user_id).await.unwrap();

        let film = svc.get_film(film_id).await.unwrap();
        assert_eq!(film.liked_user_ids.len(), 1);
        assert!(film.liked_user_ids.contains(&user_id));
    }

    #[tokio::test]
    async fn test_add_then_remove_like_round_trips() {
        let svc = service();
        let user_id = seed_user(&svc, "joe").await;
        let film_id = svc.add_film(film("The Matrix")).await.unwrap().id;

        svc.add_like(film_id, user_id).await.unwrap();
        svc.remove_like(film_id, user_id).await.unwrap();

        let film = svc.get_film(film_id).await.unwrap();
        assert!(film.liked_user_ids.is_empty());

        // removing again is a silent no-op
        svc.remove_like(film_id, user_id).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_likes_are_all_recorded() {
        let svc = Arc::new(service());
        let film_id = svc.add_film(film("The Matrix")).await.unwrap().id;

        let mut user_ids = Vec::new();
        for i in 0..8 {
            user_ids.push(seed_user(&svc, &format!("user{i}")).await);
        }

        let mut handles = Vec::new();
        for user_id in user_ids {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.add_like(film_id, user_id).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let film = svc.get_film(film_id).await.unwrap();
        assert_eq!(film.liked_user_ids.len(), 8);
    }

    #[tokio::test]
    async fn test_like_with_unknown_user_is_not_found() {
        let svc = service();
        let film_id = svc.add_film(film("The Matrix")).await.unwrap().id;

        let err = svc.add_like(film_id, 42).await.unwrap_err();
        assert!(err.is_not_found());

        let film = svc.get_film(film_id).await.unwrap();
        assert!(film.liked_user_ids.is_empty());
    }

    #[tokio::test]
    async fn test_like_with_unknown_film_is_not_found() {
        let svc = service();
        let user_id = seed_user(&svc, "joe").await;

        let err = svc.add_like(42, user_id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_most_popular_orders_by_like_count() {
        let svc = service();
        let users: Vec<u64> = {
            let mut ids = Vec::new();
            for login in ["a", "b", "c"] {
                ids.push(seed_user(&svc, login).await);
            }
            ids
        };

        // like counts per film: 3, 1, 2
        let three = svc.add_film(film("Three")).await.unwrap().id;
        let one = svc.add_film(film("One")).await.unwrap().id;
        let two = svc.add_film(film("Two")).await.unwrap().id;
        for &u in &users {
            svc.add_like(three, u).await.unwrap();
        }
        svc.add_like(one, users[0]).await.unwrap();
        svc.add_like(two, users[0]).await.unwrap();
        svc.add_like(two, users[1]).await.unwrap();

        let top = svc.get_most_popular(2).await.unwrap();
        let ids: Vec<u64> = top.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![three, two]);
    }

    #[tokio::test]
    async fn test_most_popular_breaks_ties_by_ascending_id() {
        let svc = service();
        let first = svc.add_film(film("First")).await.unwrap().id;
        let second = svc.add_film(film("Second")).await.unwrap().id;

        let top = svc.get_most_popular(10).await.unwrap();
        let ids: Vec<u64> = top.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_preserves_like_set() {
        let svc = service();
        let user_id = seed_user(&svc, "joe").await;
        let created = svc.add_film(film("The Matrix")).await.unwrap();
        svc.add_like(created.id, user_id).await.unwrap();

        // client update carries an empty (or bogus) like set
        let mut changed = created.clone();
        changed.name = "The Matrix Reloaded".to_string();
        changed.liked_user_ids.clear();
        svc.update_film(changed).await.unwrap();

        let fetched = svc.get_film(created.id).await.unwrap();
        assert_eq!(fetched.name, "The Matrix Reloaded");
        assert!(fetched.liked_user_ids.contains(&user_id));
    }

    #[tokio::test]
    async fn test_update_unknown_film_is_not_found() {
        let svc = service();
        let mut f = film("Ghost");
        f.id = 99;
        assert!(svc.update_film(f).await.unwrap_err().is_not_found());
        assert!(svc.get_all().await.unwrap().is_empty());
    }
}
