//! Film entity definition.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A film in the catalog.
///
/// `liked_user_ids` is owned by the film but is only ever mutated through the
/// like/unlike operations; a set carried on an incoming update is ignored.
/// Dates serialize as `yyyy-MM-dd`, the set as a JSON array of ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Unique identifier, assigned by the store on creation.
    #[serde(default)]
    pub id: u64,
    /// Title (must be non-blank).
    pub name: String,
    /// Short description, at most 200 characters.
    #[serde(default)]
    pub description: String,
    /// Release date; must be strictly after the earliest admissible date.
    pub release_date: NaiveDate,
    /// Running time in minutes (must be positive).
    pub duration: i64,
    /// Ids of users who liked this film.
    #[serde(default)]
    pub liked_user_ids: BTreeSet<u64>,
}

impl Film {
    /// Creates a new film with no id and no likes.
    pub fn new(name: impl Into<String>, release_date: NaiveDate, duration: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            release_date,
            duration,
            liked_user_ids: BTreeSet::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Number of distinct users who liked this film.
    pub fn like_count(&self) -> usize {
        self.liked_user_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_json_shape() {
        let mut film = Film::new(
            "Arrival",
            NaiveDate::from_ymd_opt(2016, 11, 11).unwrap(),
            116,
        )
        .with_description("First contact");
        film.id = 3;
        film.liked_user_ids.insert(2);
        film.liked_user_ids.insert(1);

        let json = serde_json::to_value(&film).unwrap();
        assert_eq!(json["releaseDate"], "2016-11-11");
        assert_eq!(json["likedUserIds"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_film_deserializes_without_optional_fields() {
        let film: Film = serde_json::from_str(
            r#"{"name":"Alien","releaseDate":"1979-05-25","duration":117}"#,
        )
        .unwrap();
        assert_eq!(film.id, 0);
        assert_eq!(film.description, "");
        assert!(film.liked_user_ids.is_empty());
    }
}
