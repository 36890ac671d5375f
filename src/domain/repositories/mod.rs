//! Repository trait definitions for the domain layer.
//!
//! These traits abstract storage of the object graph. They are implemented by
//! `crate::infrastructure::persistence`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Methods take `&self`; implementations use interior mutability
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - Article storage and browsing queries
//! - [`UserRepository`] - User accounts
//! - [`TagRepository`] - Tags
//! - [`CommentRepository`] - Comments
//!
//! # Testing
//!
//! See integration tests in `tests/repository_memory.rs` for usage examples.

pub mod article_repository;
pub mod comment_repository;
pub mod tag_repository;
pub mod user_repository;

pub use article_repository::ArticleRepository;
pub use comment_repository::CommentRepository;
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
