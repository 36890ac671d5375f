//! Repository trait for user accounts.

use crate::domain::entities::UserRef;
use crate::error::AppError;

/// Repository interface for registered users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    fn add_user(&self, user: UserRef) -> Result<(), AppError>;

    /// Finds a user by exact username.
    fn find_user(&self, username: &str) -> Result<Option<UserRef>, AppError>;

    fn count_users(&self) -> Result<usize, AppError>;
}
