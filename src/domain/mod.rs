//! Domain layer: the in-memory object model and its invariants.
//!
//! # Architecture
//!
//! - [`entities`] - Catalogue entities and name-identity value objects
//! - [`associations`] - Factories that link entities on both sides at once
//! - [`error`] - Failures raised by the model
//! - [`repositories`] - Storage trait definitions
//!
//! # Design Principles
//!
//! - The model is synchronous and performs no I/O or logging
//! - Entities are mutated only through their own methods; cross-entity links are
//!   created only through the association factories
//! - No global registry: relationships are explicit handles passed in by the caller

pub mod associations;
pub mod entities;
pub mod error;
pub mod repositories;

pub use associations::{make_comment, make_comment_at, make_tag_association};
pub use error::ModelError;
