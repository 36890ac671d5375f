//! User entity.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::{CommentRef, UserRef};

/// A registered user and the comments they have written.
///
/// The password is stored exactly as handed in; hashing happens in
/// [`crate::application::services::AuthService`] before a `User` is built.
/// Two users with the same username are the same identity regardless of password.
pub struct User {
    username: String,
    password: String,
    comments: Vec<CommentRef>,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            comments: Vec::new(),
        }
    }

    pub fn into_ref(self) -> UserRef {
        Rc::new(RefCell::new(self))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Comments in the order they were written.
    pub fn comments(&self) -> &[CommentRef] {
        &self.comments
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
    }

    pub(crate) fn add_comment(&mut self, comment: CommentRef) {
        self.comments.push(comment);
    }

    pub(crate) fn remove_comment(&mut self, comment: &CommentRef) {
        self.comments.retain(|own| !Rc::ptr_eq(own, comment));
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("comments", &self.comments.len())
            .finish_non_exhaustive()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("dbowie", "1234567890");
        assert_eq!(user.username(), "dbowie");
        assert_eq!(user.password(), "1234567890");
        assert_eq!(user.number_of_comments(), 0);
    }

    #[test]
    fn test_user_equality_by_username_only() {
        assert_eq!(User::new("thorke", "abc"), User::new("thorke", "xyz"));
        assert_ne!(User::new("thorke", "abc"), User::new("fmercury", "abc"));
    }

    #[test]
    fn test_debug_hides_password() {
        let user = User::new("izzy", "s3cret-Pass");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("izzy"));
        assert!(!rendered.contains("s3cret-Pass"));
    }
}
