//! User registration and password authentication.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::rc::Rc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::dto::{Registration, UserView};
use crate::error::AppError;
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

type HmacSha256 = Hmac<Sha256>;

/// Scheme prefix of stored password hashes.
const HASH_SCHEME: &str = "hmac-sha256";

/// Random salt length in bytes.
const SALT_LENGTH_BYTES: usize = 16;

/// Service for registering users and checking their passwords.
///
/// Passwords are stored as `hmac-sha256$<salt-hex>$<mac-hex>`, where the MAC is
/// HMAC-SHA256 keyed by `signing_secret` over the salt followed by the password.
/// Reading the stored hashes is not enough to check a guess without the secret.
pub struct AuthService<U: UserRepository> {
    repository: Rc<U>,
    signing_secret: String,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository
    /// - `signing_secret` - HMAC key; must match the value used when users were added
    pub fn new(repository: Rc<U>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    fn mac(&self, salt: &[u8], password: &str) -> Result<HmacSha256, AppError> {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes()).map_err(|e| {
            AppError::internal("Invalid signing key", json!({ "error": e.to_string() }))
        })?;
        mac.update(salt);
        mac.update(password.as_bytes());
        Ok(mac)
    }

    /// Hashes `password` with a fresh random salt.
    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let mut salt = [0u8; SALT_LENGTH_BYTES];
        getrandom::fill(&mut salt).map_err(|e| {
            AppError::internal("Failed to generate salt", json!({ "error": e.to_string() }))
        })?;

        let mac = self.mac(&salt, password)?;
        Ok(format!(
            "{HASH_SCHEME}${}${}",
            hex::encode(salt),
            hex::encode(mac.finalize().into_bytes())
        ))
    }

    /// Checks `password` against a stored hash in constant time.
    ///
    /// Malformed hashes never verify.
    fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        let mut parts = stored.split('$');
        let (Some(HASH_SCHEME), Some(salt_hex), Some(mac_hex), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Ok(false);
        };

        let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(mac_hex)) else {
            return Ok(false);
        };

        Ok(self.mac(&salt, password)?.verify_slice(&expected).is_ok())
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username or password breaks the
    /// [`Registration`] rules.
    /// Returns [`AppError::Conflict`] if the username is taken.
    pub fn add_user(&self, username: &str, password: &str) -> Result<UserView, AppError> {
        let registration = Registration {
            username: username.to_string(),
            password: password.to_string(),
        };
        registration.validate()?;

        if self.repository.find_user(username)?.is_some() {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        let user = User::new(registration.username, self.hash_password(password)?).into_ref();
        self.repository.add_user(Rc::clone(&user))?;

        info!(username, "User registered");
        let view = UserView::from(&*user.borrow());
        Ok(view)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such user exists.
    pub fn get_user(&self, username: &str) -> Result<UserView, AppError> {
        let user = self.repository.find_user(username)?.ok_or_else(|| {
            AppError::not_found("User not found", json!({ "username": username }))
        })?;
        let view = UserView::from(&*user.borrow());
        Ok(view)
    }

    /// Authenticates a user by password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the password is wrong.
    /// Both cases produce the same message.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserView, AppError> {
        let rejected = || {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid username or password" }),
            )
        };

        let Some(user) = self.repository.find_user(username)? else {
            warn!(username, "Authentication for unknown user");
            return Err(rejected());
        };

        let user = user.borrow();
        if !self.verify_password(password, user.password())? {
            warn!(username, "Authentication failed");
            return Err(rejected());
        }

        Ok(UserView::from(&*user))
    }
}
