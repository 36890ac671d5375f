//! Repository trait for comments.

use crate::domain::entities::CommentRef;
use crate::error::AppError;

/// Repository interface for comments.
///
/// Comments are created by [`crate::domain::make_comment`]; the repository only keeps
/// track of them.
#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository {
    /// Stores a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the comment's user or article no longer
    /// exists.
    fn add_comment(&self, comment: CommentRef) -> Result<(), AppError>;

    /// All comments in insertion order.
    fn all_comments(&self) -> Result<Vec<CommentRef>, AppError>;

    fn count_comments(&self) -> Result<usize, AppError>;
}
