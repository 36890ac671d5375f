//! # Newsreel
//!
//! An article and movie catalogue built on an in-memory object model: articles with
//! comments and tags, registered users, and the movies, actors, directors and genres of
//! a CSV dataset.
//!
//! ## Architecture
//!
//! The crate keeps the layer separation of a service codebase, minus the network:
//!
//! - **Domain Layer** ([`domain`]) - Entities, association rules and repository traits
//! - **Application Layer** ([`application`]) - Services for browsing, commenting and
//!   user accounts
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository and the CSV
//!   dataset loader
//! - **Views** ([`dto`]) - Serialisable snapshots handed out by the services
//!
//! ## Threading
//!
//! Entity handles are `Rc<RefCell<_>>` with `Weak` back-references, so the object graph
//! and everything holding it is confined to one thread.
//!
//! ## Quick Start
//!
//! ```bash
//! export MOVIES_CSV="data/Data1000Movies.csv"
//! cargo run -- first
//! cargo run -- tag Action
//! ```
//!
//! ## Configuration
//!
//! Runtime configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, NewsService};
    pub use crate::domain::entities::{
        Actor, Article, ArticleRef, Comment, CommentRef, Director, Genre, Movie, NameIdentity,
        Tag, TagRef, User, UserRef,
    };
    pub use crate::domain::{ModelError, make_comment, make_tag_association};
    pub use crate::error::AppError;
    pub use crate::infrastructure::dataset::{MovieDataset, MovieFileReader, load_articles};
    pub use crate::infrastructure::persistence::MemoryRepository;
}
