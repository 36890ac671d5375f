//! Repository trait for tags.

use crate::domain::entities::TagRef;
use crate::error::AppError;

/// Repository interface for tags.
#[cfg_attr(test, mockall::automock)]
pub trait TagRepository {
    /// Stores a tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a tag with the same name is stored.
    fn add_tag(&self, tag: TagRef) -> Result<(), AppError>;

    fn find_tag(&self, tag_name: &str) -> Result<Option<TagRef>, AppError>;

    /// All tags in insertion order.
    fn all_tags(&self) -> Result<Vec<TagRef>, AppError>;
}
