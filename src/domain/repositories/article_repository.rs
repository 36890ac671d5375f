//! Repository trait for articles and the queries used for browsing.

use crate::domain::entities::ArticleRef;
use crate::error::AppError;

/// Repository interface for the article catalogue.
///
/// Articles are identified by their externally assigned id. Browsing queries follow
/// date order: "first" is the earliest article, "last" the latest.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_memory.rs`
#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository {
    /// Stores an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the article has no id.
    /// Returns [`AppError::Conflict`] if an article with the same id is stored.
    fn add_article(&self, article: ArticleRef) -> Result<(), AppError>;

    fn find_article(&self, id: i64) -> Result<Option<ArticleRef>, AppError>;

    fn count_articles(&self) -> Result<usize, AppError>;

    /// The article with the earliest date, if any.
    fn first_article(&self) -> Result<Option<ArticleRef>, AppError>;

    /// The article with the latest date, if any.
    fn last_article(&self) -> Result<Option<ArticleRef>, AppError>;

    /// All articles published on `date`, in insertion order.
    fn find_articles_by_date(&self, date: i32) -> Result<Vec<ArticleRef>, AppError>;

    /// Articles whose ids appear in `ids`, ordered by id. Unknown ids are skipped.
    fn find_articles_by_ids(&self, ids: &[i64]) -> Result<Vec<ArticleRef>, AppError>;

    /// Ids of the articles tagged `tag_name`. Empty for an unknown tag.
    fn find_article_ids_for_tag(&self, tag_name: &str) -> Result<Vec<i64>, AppError>;

    /// The nearest date strictly before the article's date.
    fn previous_date(&self, article: &ArticleRef) -> Result<Option<i32>, AppError>;

    /// The nearest date strictly after the article's date.
    fn next_date(&self, article: &ArticleRef) -> Result<Option<i32>, AppError>;

    /// Articles whose title contains `query`, ignoring case, in date order.
    fn search_articles_by_title(&self, query: &str) -> Result<Vec<ArticleRef>, AppError>;
}
