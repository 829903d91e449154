//! Core entity definitions for Filmgraph.
//!
//! This crate defines the two domain entities (films and users), their JSON
//! representation, and the boundary validation rules applied before a record
//! is accepted into the system.

mod film;
mod user;
pub mod validation;

pub use film::*;
pub use user::*;
pub use validation::{validate_film, validate_user, ValidationError};
