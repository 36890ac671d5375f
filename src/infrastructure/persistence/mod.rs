//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryRepository`] - Keeps articles, users, tags and comments in memory and
//!   implements every repository trait

pub mod memory_repository;

pub use memory_repository::MemoryRepository;
