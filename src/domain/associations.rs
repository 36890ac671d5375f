//! Factory functions that link entities while keeping both sides consistent.

use std::rc::Rc;

use chrono::{DateTime, Utc};

use super::entities::{ArticleRef, Comment, CommentRef, NameIdentity, TagRef, UserRef};
use super::error::ModelError;

/// Creates a comment stamped with the current time and registers it on both the
/// user and the article.
///
/// The timestamp is taken at call time, so every call gets its own.
pub fn make_comment(
    text: impl Into<String>,
    user: &UserRef,
    article: &ArticleRef,
) -> CommentRef {
    make_comment_at(text, user, article, Utc::now())
}

/// Creates a comment with an explicit timestamp and registers it on both the user and
/// the article.
pub fn make_comment_at(
    text: impl Into<String>,
    user: &UserRef,
    article: &ArticleRef,
    timestamp: DateTime<Utc>,
) -> CommentRef {
    let comment = Rc::new(Comment::new(user, article, text.into(), timestamp));

    user.borrow_mut().add_comment(Rc::clone(&comment));
    article.borrow_mut().add_comment(Rc::clone(&comment));

    comment
}

/// Unregisters a comment from its user and article, undoing [`make_comment`].
///
/// Owners that have already been dropped are skipped.
pub(crate) fn withdraw_comment(comment: &CommentRef) {
    if let Some(user) = comment.user() {
        user.borrow_mut().remove_comment(comment);
    }
    if let Some(article) = comment.article() {
        article.borrow_mut().remove_comment(comment);
    }
}

/// Applies `tag` to `article`, recording the link on both sides.
///
/// # Errors
///
/// Returns [`ModelError::DuplicateAssociation`] if the tag is already applied to an
/// equal article. Neither side is modified in that case.
pub fn make_tag_association(article: &ArticleRef, tag: &TagRef) -> Result<(), ModelError> {
    if tag.borrow().is_applied_to(article) {
        return Err(ModelError::DuplicateAssociation {
            tag: tag.borrow().identity().to_string(),
            article: article.borrow().title().to_string(),
        });
    }

    article.borrow_mut().add_tag(Rc::clone(tag));
    tag.borrow_mut().add_article(article);

    Ok(())
}
