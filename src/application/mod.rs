//! Application layer services.
//!
//! Services coordinate repository calls, validation and the association rules of the
//! domain model, and hand out serialisable views from [`crate::dto`].
//!
//! # Available Services
//!
//! - [`services::news_service::NewsService`] - Article browsing, search and comments
//! - [`services::auth_service::AuthService`] - User registration and password checks

pub mod services;
