//! Comment view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Comment;

/// A comment as shown to readers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    /// `None` if the author no longer exists.
    pub username: Option<String>,
    pub article_id: Option<i64>,
    pub comment_text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            username: comment.username(),
            article_id: comment.article_id(),
            comment_text: comment.comment().to_string(),
            timestamp: comment.timestamp(),
        }
    }
}
