//! In-memory implementation of the repository traits.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde_json::json;
use tracing::debug;

use crate::domain::entities::{ArticleRef, CommentRef, TagRef, UserRef};
use crate::domain::repositories::{
    ArticleRepository, CommentRepository, TagRepository, UserRepository,
};
use crate::error::AppError;

/// Repository keeping the whole object graph in memory.
///
/// Implements every repository trait, so a single instance can back all services.
/// Articles are kept sorted by date (stable for equal dates) next to an id index.
///
/// Not thread-safe: the handles it stores are `Rc`-based and the collections sit in
/// `RefCell`s.
#[derive(Default)]
pub struct MemoryRepository {
    articles: RefCell<Vec<ArticleRef>>,
    articles_by_id: RefCell<BTreeMap<i64, ArticleRef>>,
    users: RefCell<HashMap<String, UserRef>>,
    tags: RefCell<Vec<TagRef>>,
    comments: RefCell<Vec<CommentRef>>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for MemoryRepository {
    fn add_article(&self, article: ArticleRef) -> Result<(), AppError> {
        let (id, date) = {
            let a = article.borrow();
            (a.id(), a.date())
        };

        let id = id.ok_or_else(|| {
            AppError::bad_request(
                "Article must have an id to be stored",
                json!({ "title": article.borrow().title() }),
            )
        })?;

        let mut by_id = self.articles_by_id.borrow_mut();
        if by_id.contains_key(&id) {
            return Err(AppError::conflict(
                "Article id already exists",
                json!({ "id": id }),
            ));
        }
        by_id.insert(id, Rc::clone(&article));

        let mut articles = self.articles.borrow_mut();
        let position = articles.partition_point(|a| a.borrow().date() <= date);
        articles.insert(position, article);

        debug!(id, date, "Article stored");
        Ok(())
    }

    fn find_article(&self, id: i64) -> Result<Option<ArticleRef>, AppError> {
        Ok(self.articles_by_id.borrow().get(&id).cloned())
    }

    fn count_articles(&self) -> Result<usize, AppError> {
        Ok(self.articles.borrow().len())
    }

    fn first_article(&self) -> Result<Option<ArticleRef>, AppError> {
        Ok(self.articles.borrow().first().cloned())
    }

    fn last_article(&self) -> Result<Option<ArticleRef>, AppError> {
        Ok(self.articles.borrow().last().cloned())
    }

    fn find_articles_by_date(&self, date: i32) -> Result<Vec<ArticleRef>, AppError> {
        Ok(self
            .articles
            .borrow()
            .iter()
            .filter(|a| a.borrow().date() == date)
            .cloned()
            .collect())
    }

    fn find_articles_by_ids(&self, ids: &[i64]) -> Result<Vec<ArticleRef>, AppError> {
        let by_id = self.articles_by_id.borrow();
        let mut wanted: Vec<i64> = ids.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        Ok(wanted
            .into_iter()
            .filter_map(|id| by_id.get(&id).cloned())
            .collect())
    }

    fn find_article_ids_for_tag(&self, tag_name: &str) -> Result<Vec<i64>, AppError> {
        Ok(self
            .articles_by_id
            .borrow()
            .iter()
            .filter(|(_, a)| a.borrow().has_tag_named(tag_name))
            .map(|(id, _)| *id)
            .collect())
    }

    fn previous_date(&self, article: &ArticleRef) -> Result<Option<i32>, AppError> {
        let date = article.borrow().date();
        Ok(self
            .articles
            .borrow()
            .iter()
            .map(|a| a.borrow().date())
            .filter(|d| *d < date)
            .max())
    }

    fn next_date(&self, article: &ArticleRef) -> Result<Option<i32>, AppError> {
        let date = article.borrow().date();
        Ok(self
            .articles
            .borrow()
            .iter()
            .map(|a| a.borrow().date())
            .find(|d| *d > date))
    }

    fn search_articles_by_title(&self, query: &str) -> Result<Vec<ArticleRef>, AppError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .articles
            .borrow()
            .iter()
            .filter(|a| a.borrow().title().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

impl UserRepository for MemoryRepository {
    fn add_user(&self, user: UserRef) -> Result<(), AppError> {
        let username = user.borrow().username().to_string();
        let mut users = self.users.borrow_mut();

        if users.contains_key(&username) {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        debug!(%username, "User stored");
        users.insert(username, user);
        Ok(())
    }

    fn find_user(&self, username: &str) -> Result<Option<UserRef>, AppError> {
        Ok(self.users.borrow().get(username).cloned())
    }

    fn count_users(&self) -> Result<usize, AppError> {
        Ok(self.users.borrow().len())
    }
}

impl TagRepository for MemoryRepository {
    fn add_tag(&self, tag: TagRef) -> Result<(), AppError> {
        let mut tags = self.tags.borrow_mut();

        if tags.iter().any(|existing| *existing.borrow() == *tag.borrow()) {
            return Err(AppError::conflict(
                "Tag already exists",
                json!({ "tag": tag.borrow().tag_name() }),
            ));
        }

        tags.push(tag);
        Ok(())
    }

    fn find_tag(&self, tag_name: &str) -> Result<Option<TagRef>, AppError> {
        Ok(self
            .tags
            .borrow()
            .iter()
            .find(|tag| tag.borrow().tag_name() == Some(tag_name))
            .cloned())
    }

    fn all_tags(&self) -> Result<Vec<TagRef>, AppError> {
        Ok(self.tags.borrow().clone())
    }
}

impl CommentRepository for MemoryRepository {
    fn add_comment(&self, comment: CommentRef) -> Result<(), AppError> {
        if comment.user().is_none() {
            return Err(AppError::bad_request(
                "Comment is not attached to a user",
                json!({ "comment": comment.comment() }),
            ));
        }
        if comment.article().is_none() {
            return Err(AppError::bad_request(
                "Comment is not attached to an article",
                json!({ "comment": comment.comment() }),
            ));
        }

        self.comments.borrow_mut().push(comment);
        Ok(())
    }

    fn all_comments(&self) -> Result<Vec<CommentRef>, AppError> {
        Ok(self.comments.borrow().clone())
    }

    fn count_comments(&self) -> Result<usize, AppError> {
        Ok(self.comments.borrow().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Article, Tag, User};
    use crate::domain::{make_comment, make_tag_association};

    fn article(id: i64, date: i32, title: &str) -> ArticleRef {
        Article::new(date, title, "", "", "").with_id(id).into_ref()
    }

    #[test]
    fn test_articles_are_kept_in_date_order() {
        let repo = MemoryRepository::new();
        repo.add_article(article(1, 2016, "Split")).unwrap();
        repo.add_article(article(2, 2014, "Guardians of the Galaxy")).unwrap();
        repo.add_article(article(3, 2016, "Sing")).unwrap();

        let first = repo.first_article().unwrap().unwrap();
        let last = repo.last_article().unwrap().unwrap();

        assert_eq!(first.borrow().id(), Some(2));
        assert_eq!(last.borrow().id(), Some(3));
    }

    #[test]
    fn test_article_without_id_is_rejected() {
        let repo = MemoryRepository::new();
        let result = repo.add_article(Article::new(2016, "Split", "", "", "").into_ref());

        assert!(matches!(result, Err(AppError::Validation { .. })));
        assert_eq!(repo.count_articles().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_article_id_is_rejected() {
        let repo = MemoryRepository::new();
        repo.add_article(article(1, 2016, "Split")).unwrap();

        let result = repo.add_article(article(1, 2016, "Sing"));

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        assert_eq!(repo.count_articles().unwrap(), 1);
    }

    #[test]
    fn test_empty_search_returns_nothing() {
        let repo = MemoryRepository::new();
        repo.add_article(article(1, 2016, "Split")).unwrap();

        assert!(repo.search_articles_by_title("   ").unwrap().is_empty());
    }

    #[test]
    fn test_comment_with_dropped_article_is_rejected() {
        let repo = MemoryRepository::new();
        let user = User::new("thorke", "hashed").into_ref();
        let comment = {
            let transient = article(9, 2016, "Split");
            make_comment("gone soon", &user, &transient)
        };

        let result = repo.add_comment(comment);

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_tag_names_are_unique() {
        let repo = MemoryRepository::new();
        repo.add_tag(Tag::new("Action").into_ref()).unwrap();

        let result = repo.add_tag(Tag::new("Action").into_ref());

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[test]
    fn test_ids_for_tag() {
        let repo = MemoryRepository::new();
        let action = Tag::new("Action").into_ref();
        let split = article(1, 2016, "Split");
        let guardians = article(2, 2014, "Guardians of the Galaxy");
        make_tag_association(&guardians, &action).unwrap();
        repo.add_article(split).unwrap();
        repo.add_article(guardians).unwrap();

        assert_eq!(repo.find_article_ids_for_tag("Action").unwrap(), vec![2]);
        assert!(repo.find_article_ids_for_tag("Horror").unwrap().is_empty());
    }
}
