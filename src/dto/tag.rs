//! Tag view.

use serde::Serialize;

use crate::domain::entities::Tag;

/// A tag and the ids of the articles it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub name: Option<String>,
    pub tagged_articles: Vec<i64>,
}

impl From<&Tag> for TagView {
    fn from(tag: &Tag) -> Self {
        Self {
            name: tag.tag_name().map(str::to_string),
            tagged_articles: tag
                .tagged_articles()
                .iter()
                .filter_map(|article| article.borrow().id())
                .collect(),
        }
    }
}
