//! Data Transfer Objects returned by the application services.
//!
//! Views are plain `serde::Serialize` snapshots of the object graph, detached from the
//! `Rc`/`RefCell` handles so they can be printed or encoded freely. Input DTOs use
//! `validator` for validation.

pub mod article;
pub mod comment;
pub mod registration;
pub mod tag;
pub mod user;

pub use article::{ArticleView, DatedArticles};
pub use comment::CommentView;
pub use registration::Registration;
pub use tag::TagView;
pub use user::UserView;
