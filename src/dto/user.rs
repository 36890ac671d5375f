//! User view.

use serde::Serialize;

use crate::domain::entities::User;

/// A user account. The password hash is available to callers but never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub number_of_comments: usize,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            password_hash: user.password().to_string(),
            number_of_comments: user.number_of_comments(),
        }
    }
}
