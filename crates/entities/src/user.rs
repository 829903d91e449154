//! User entity definition.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user of the catalog.
///
/// `friend_ids` is a directed friend set: `a` holding `b` does not imply `b`
/// holds `a`. It is only mutated through the add/remove friend operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    #[serde(default)]
    pub id: u64,
    /// Email address.
    pub email: String,
    /// Login handle (non-blank, no whitespace).
    pub login: String,
    /// Display name; falls back to `login` when blank.
    #[serde(default)]
    pub name: String,
    /// Date of birth; must not be in the future.
    pub birthday: NaiveDate,
    /// Ids of users this user considers friends.
    #[serde(default)]
    pub friend_ids: BTreeSet<u64>,
}

impl User {
    /// Creates a new user with no id and no friends.
    pub fn new(
        email: impl Into<String>,
        login: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            email: email.into(),
            login: login.into(),
            name: String::new(),
            birthday,
            friend_ids: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
