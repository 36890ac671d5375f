//! Core domain entities of the catalogue.
//!
//! # Entity Types
//!
//! - [`Director`], [`Genre`], [`Actor`] - Name-identity value objects
//! - [`Tag`] - A label applied to articles
//! - [`User`] - An account and the comments it authored
//! - [`Article`] - The primary content item, owning comments and tags
//! - [`Comment`] - An immutable user/article/text/timestamp record
//! - [`Movie`] - A movie with validated fields and actor/genre collections
//!
//! # Shared Handles
//!
//! Users, articles and tags take part in bidirectional associations, so they are
//! passed around as `Rc<RefCell<_>>` handles ([`UserRef`], [`ArticleRef`], [`TagRef`]).
//! Comments never change after creation and are shared as `Rc<Comment>` ([`CommentRef`]).
//! Back-references that would otherwise form cycles are weak.
//!
//! None of these types are `Send`. Callers that need to share an entity between threads
//! must serialise access themselves; the model adds no locking.

pub mod actor;
pub mod article;
pub mod comment;
pub mod director;
pub mod genre;
pub mod movie;
pub mod name;
pub mod tag;
pub mod user;

use std::cell::RefCell;
use std::rc::Rc;

pub use actor::Actor;
pub use article::Article;
pub use comment::Comment;
pub use director::Director;
pub use genre::Genre;
pub use movie::{MIN_RELEASE_YEAR, Movie};
pub use name::{NameIdentity, NormalizedName};
pub use tag::Tag;
pub use user::User;

pub type UserRef = Rc<RefCell<User>>;
pub type ArticleRef = Rc<RefCell<Article>>;
pub type TagRef = Rc<RefCell<Tag>>;
pub type CommentRef = Rc<Comment>;
