//! Domain services.
//!
//! All derived logic lives here: popularity ranking, friend-set intersection,
//! name defaulting, and the existence checks around like/friend mutations.
//! Services call into the stores and propagate store errors unchanged.

pub mod films;
pub mod users;

pub use films::FilmService;
pub use users::UserService;
