//! Business logic services for the application layer.

pub mod auth_service;
pub mod news_service;

pub use auth_service::AuthService;
pub use news_service::NewsService;
