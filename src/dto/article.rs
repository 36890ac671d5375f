//! Article views.

use serde::Serialize;

use super::{CommentView, TagView};
use crate::domain::entities::Article;

/// An article with its comments and tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    pub id: Option<i64>,
    pub date: i32,
    pub title: String,
    pub first_para: String,
    pub hyperlink: String,
    pub image_hyperlink: String,
    pub director: Option<String>,
    pub actors: Vec<String>,
    pub runtime: Option<u32>,
    pub rating: Option<f64>,
    pub comments: Vec<CommentView>,
    pub tags: Vec<TagView>,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id(),
            date: article.date(),
            title: article.title().to_string(),
            first_para: article.first_para().to_string(),
            hyperlink: article.hyperlink().to_string(),
            image_hyperlink: article.image_hyperlink().to_string(),
            director: article.director().map(str::to_string),
            actors: article.actors().to_vec(),
            runtime: article.runtime(),
            rating: article.rating(),
            comments: article
                .comments()
                .iter()
                .map(|comment| CommentView::from(comment.as_ref()))
                .collect(),
            tags: article
                .tags()
                .iter()
                .map(|tag| TagView::from(&*tag.borrow()))
                .collect(),
        }
    }
}

/// Articles published on one date, with the neighbouring dates for paging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedArticles {
    pub date: i32,
    pub articles: Vec<ArticleView>,
    pub previous_date: Option<i32>,
    pub next_date: Option<i32>,
}
