//! Boundary validation for incoming entities.
//!
//! These checks run at the HTTP boundary before any service call; a record
//! that fails them never reaches the service or store layer.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use crate::{Film, User};

/// Maximum length of a film description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A field constraint violation on a submitted entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// The offending field.
    pub field: &'static str,
    /// Human-readable reason for the rejection.
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Earliest admissible release date: the first public film screening.
/// Anything on or before this date is rejected.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).expect("constant date is valid")
}

/// Checks all field constraints on a submitted film.
pub fn validate_film(film: &Film) -> Result<(), ValidationError> {
    if film.name.trim().is_empty() {
        return Err(ValidationError::new("name", "must not be blank"));
    }
    if film.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            "description",
            format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
        ));
    }
    if film.release_date <= earliest_release_date() {
        return Err(ValidationError::new(
            "releaseDate",
            format!("must be after {}", earliest_release_date()),
        ));
    }
    if film.duration <= 0 {
        return Err(ValidationError::new("duration", "must be positive"));
    }
    Ok(())
}

/// Checks all field constraints on a submitted user.
pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    if !is_valid_email(&user.email) {
        return Err(ValidationError::new(
            "email",
            "must be a valid email address",
        ));
    }
    if user.login.is_empty() || user.login.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(
            "login",
            "must be non-blank and contain no whitespace",
        ));
    }
    if user.birthday > Utc::now().date_naive() {
        return Err(ValidationError::new("birthday", "must not be in the future"));
    }
    Ok(())
}

/// Minimal email shape check: one `@` with non-empty sides, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn film() -> Film {
        Film::new(
            "Metropolis",
            NaiveDate::from_ymd_opt(1927, 1, 10).unwrap(),
            153,
        )
    }

    fn user() -> User {
        User::new(
            "joe@example.com",
            "joe",
            NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
        )
    }

    #[test]
    fn test_valid_film_passes() {
        assert!(validate_film(&film()).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut f = film();
        f.name = "   ".to_string();
        assert_eq!(validate_film(&f).unwrap_err().field, "name");
    }

    #[test]
    fn test_description_over_200_chars_rejected() {
        let mut f = film();
        f.description = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(validate_film(&f).is_ok());
        f.description.push('x');
        assert_eq!(validate_film(&f).unwrap_err().field, "description");
    }

    #[test]
    fn test_release_date_floor_is_exclusive() {
        let mut f = film();
        f.release_date = earliest_release_date();
        assert_eq!(validate_film(&f).unwrap_err().field, "releaseDate");
        f.release_date = earliest_release_date().succ_opt().unwrap();
        assert!(validate_film(&f).is_ok());
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let mut f = film();
        f.duration = 0;
        assert_eq!(validate_film(&f).unwrap_err().field, "duration");
        f.duration = -90;
        assert_eq!(validate_film(&f).unwrap_err().field, "duration");
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(validate_user(&user()).is_ok());
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in ["", "plainaddress", "@nolocal", "nodomain@", "two words@x"] {
            let mut u = user();
            u.email = email.to_string();
            assert_eq!(validate_user(&u).unwrap_err().field, "email", "{email}");
        }
    }

    #[test]
    fn test_login_with_whitespace_rejected() {
        let mut u = user();
        u.login = "log in".to_string();
        assert_eq!(validate_user(&u).unwrap_err().field, "login");
        u.login = String::new();
        assert_eq!(validate_user(&u).unwrap_err().field, "login");
    }

    #[test]
    fn test_birthday_today_passes_future_fails() {
        let mut u = user();
        u.birthday = Utc::now().date_naive();
        assert!(validate_user(&u).is_ok());
        u.birthday = Utc::now().date_naive().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(validate_user(&u).unwrap_err().field, "birthday");
    }
}
