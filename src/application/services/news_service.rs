//! Article browsing and commenting service.

use std::rc::Rc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::ArticleRef;
use crate::domain::associations::withdraw_comment;
use crate::domain::make_comment;
use crate::domain::repositories::{ArticleRepository, CommentRepository, UserRepository};
use crate::dto::{ArticleView, CommentView, DatedArticles};
use crate::error::AppError;

/// Service for browsing articles and posting comments.
///
/// Reads go through the [`ArticleRepository`]; posting a comment also needs the
/// [`UserRepository`] to resolve the author and the [`CommentRepository`] to record it.
pub struct NewsService<A: ArticleRepository, U: UserRepository, C: CommentRepository> {
    article_repository: Rc<A>,
    user_repository: Rc<U>,
    comment_repository: Rc<C>,
}

impl<A: ArticleRepository, U: UserRepository, C: CommentRepository> NewsService<A, U, C> {
    /// Creates a new news service.
    pub fn new(
        article_repository: Rc<A>,
        user_repository: Rc<U>,
        comment_repository: Rc<C>,
    ) -> Self {
        Self {
            article_repository,
            user_repository,
            comment_repository,
        }
    }

    /// Posts a comment by `username` on the article with `article_id`.
    ///
    /// The comment is timestamped at call time and registered on both the user and the
    /// article before being stored. If storing fails, both registrations are undone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Unauthorized`] if the user is unknown.
    pub fn add_comment(
        &self,
        article_id: i64,
        comment_text: &str,
        username: &str,
    ) -> Result<CommentView, AppError> {
        let article = self.require_article(article_id)?;

        let user = self.user_repository.find_user(username)?.ok_or_else(|| {
            AppError::unauthorized("Unknown user", json!({ "username": username }))
        })?;

        let comment = make_comment(comment_text, &user, &article);
        if let Err(e) = self.comment_repository.add_comment(Rc::clone(&comment)) {
            withdraw_comment(&comment);
            return Err(e);
        }

        info!(article_id, username, "Comment added");
        Ok(CommentView::from(comment.as_ref()))
    }

    /// Retrieves an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has that id.
    pub fn get_article(&self, article_id: i64) -> Result<ArticleView, AppError> {
        let article = self.require_article(article_id)?;
        Ok(view(&article))
    }

    /// Retrieves the earliest article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the catalogue is empty.
    pub fn get_first_article(&self) -> Result<ArticleView, AppError> {
        self.article_repository
            .first_article()?
            .map(|article| view(&article))
            .ok_or_else(empty_catalogue)
    }

    /// Retrieves the latest article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the catalogue is empty.
    pub fn get_last_article(&self) -> Result<ArticleView, AppError> {
        self.article_repository
            .last_article()?
            .map(|article| view(&article))
            .ok_or_else(empty_catalogue)
    }

    /// Retrieves the articles for `date` with the previous and next dates that have
    /// articles.
    ///
    /// An unknown date yields no articles and no neighbours.
    pub fn get_articles_by_date(&self, date: i32) -> Result<DatedArticles, AppError> {
        let articles = self.article_repository.find_articles_by_date(date)?;

        let (previous_date, next_date) = match articles.first() {
            Some(first) => (
                self.article_repository.previous_date(first)?,
                self.article_repository.next_date(first)?,
            ),
            None => (None, None),
        };

        debug!(date, found = articles.len(), "Articles by date");
        Ok(DatedArticles {
            date,
            articles: articles.iter().map(view).collect(),
            previous_date,
            next_date,
        })
    }

    /// Retrieves the articles with the given ids, ordered by id. Unknown ids are skipped.
    pub fn get_articles_by_ids(&self, ids: &[i64]) -> Result<Vec<ArticleView>, AppError> {
        Ok(self
            .article_repository
            .find_articles_by_ids(ids)?
            .iter()
            .map(view)
            .collect())
    }

    /// Ids of the articles tagged `tag_name`.
    pub fn get_article_ids_for_tag(&self, tag_name: &str) -> Result<Vec<i64>, AppError> {
        self.article_repository.find_article_ids_for_tag(tag_name)
    }

    /// Retrieves the comments on an article, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub fn get_comments_for_article(&self, article_id: i64) -> Result<Vec<CommentView>, AppError> {
        let article = self.require_article(article_id)?;
        let article = article.borrow();

        Ok(article
            .comments()
            .iter()
            .map(|comment| CommentView::from(comment.as_ref()))
            .collect())
    }

    /// Case-insensitive title search.
    pub fn search_articles_by_title(&self, query: &str) -> Result<Vec<ArticleView>, AppError> {
        let found = self.article_repository.search_articles_by_title(query)?;
        debug!(query, found = found.len(), "Title search");
        Ok(found.iter().map(view).collect())
    }

    fn require_article(&self, article_id: i64) -> Result<ArticleRef, AppError> {
        self.article_repository
            .find_article(article_id)?
            .ok_or_else(|| {
                AppError::not_found("Article not found", json!({ "article_id": article_id }))
            })
    }
}

fn view(article: &ArticleRef) -> ArticleView {
    ArticleView::from(&*article.borrow())
}

fn empty_catalogue() -> AppError {
    AppError::not_found("No articles available", json!({}))
}
