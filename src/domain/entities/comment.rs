//! Comment entity linking a user to an article.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};

use super::{Article, ArticleRef, User, UserRef};

/// An immutable comment left by a user on an article.
///
/// Comments are only created by [`crate::domain::make_comment`], which registers the
/// comment on both the user and the article. The user and article own their comments;
/// the comment points back at them weakly, so [`Comment::user`] and
/// [`Comment::article`] return `None` once the owner has been dropped.
///
/// Equality is structural over user, article, text and timestamp.
pub struct Comment {
    user: Weak<RefCell<User>>,
    article: Weak<RefCell<Article>>,
    comment: String,
    timestamp: DateTime<Utc>,
}

impl Comment {
    pub(crate) fn new(
        user: &UserRef,
        article: &ArticleRef,
        comment: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user: Rc::downgrade(user),
            article: Rc::downgrade(article),
            comment,
            timestamp,
        }
    }

    pub fn user(&self) -> Option<UserRef> {
        self.user.upgrade()
    }

    pub fn article(&self) -> Option<ArticleRef> {
        self.article.upgrade()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Username of the author, if the author is still alive.
    pub fn username(&self) -> Option<String> {
        self.user().map(|user| user.borrow().username().to_string())
    }

    /// Id of the commented article, if it is alive and has one.
    pub fn article_id(&self) -> Option<i64> {
        self.article().and_then(|article| article.borrow().id())
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment")
            .field("username", &self.username())
            .field("article_id", &self.article_id())
            .field("comment", &self.comment)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// Users and articles are compared by handle first, then by value. A handle that is
/// mutably borrowed elsewhere only matches itself. Two dropped handles compare equal.
impl PartialEq for Comment {
    fn eq(&self, other: &Self) -> bool {
        self.comment == other.comment
            && self.timestamp == other.timestamp
            && same_entity(self.user(), other.user())
            && same_entity(self.article(), other.article())
    }
}

fn same_entity<T: PartialEq>(
    left: Option<Rc<RefCell<T>>>,
    right: Option<Rc<RefCell<T>>>,
) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => {
            Rc::ptr_eq(&left, &right)
                || matches!(
                    (left.try_borrow(), right.try_borrow()),
                    (Ok(l), Ok(r)) if *l == *r
                )
        }
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 7, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_comment_equality_is_structural() {
        let user = User::new("thorke", "cLQ^C#oFXloS").into_ref();
        let article = Article::new(2014, "Guardians of the Galaxy", "", "", "").into_ref();

        let first = Comment::new(&user, &article, "Loved it".to_string(), timestamp());
        let second = Comment::new(&user, &article, "Loved it".to_string(), timestamp());
        let other = Comment::new(&user, &article, "Meh".to_string(), timestamp());

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_comment_equality_while_user_is_mutably_borrowed() {
        let thorke = User::new("thorke", "cLQ^C#oFXloS").into_ref();
        let fmercury = User::new("fmercury", "mvNNbc1eLA$i").into_ref();
        let article = Article::new(2014, "Guardians of the Galaxy", "", "", "").into_ref();

        let first = Comment::new(&thorke, &article, "Loved it".to_string(), timestamp());
        let second = Comment::new(&thorke, &article, "Loved it".to_string(), timestamp());
        let foreign = Comment::new(&fmercury, &article, "Loved it".to_string(), timestamp());

        let _guard = thorke.borrow_mut();

        assert_eq!(first, second);
        assert_ne!(first, foreign);
    }
}
