//! Film and user storage for Filmgraph.
//!
//! This crate provides the storage abstraction for the catalog: one trait per
//! entity kind plus a single in-memory implementation. Stores assign identity
//! and hold the entity maps; all derived logic lives in the services above.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
