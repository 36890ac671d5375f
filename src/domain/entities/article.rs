//! Article entity: the primary content item of the catalogue.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::{ArticleRef, CommentRef, TagRef};

/// An article with its comments and tags.
///
/// The id is assigned by whoever stores the article and is never validated here.
/// The date is an opaque integer (the loaders use the release year).
///
/// Equality ignores the id, comments and tags: two articles are equal when date,
/// title, first paragraph, hyperlink and image hyperlink all match. Ordering compares
/// dates only, so articles on the same date that are not equal are unordered.
pub struct Article {
    id: Option<i64>,
    date: i32,
    title: String,
    first_para: String,
    hyperlink: String,
    image_hyperlink: String,
    director: Option<String>,
    actors: Vec<String>,
    runtime: Option<u32>,
    rating: Option<f64>,
    comments: Vec<CommentRef>,
    tags: Vec<TagRef>,
}

impl Article {
    pub fn new(
        date: i32,
        title: impl Into<String>,
        first_para: impl Into<String>,
        hyperlink: impl Into<String>,
        image_hyperlink: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            date,
            title: title.into(),
            first_para: first_para.into(),
            hyperlink: hyperlink.into(),
            image_hyperlink: image_hyperlink.into(),
            director: None,
            actors: Vec::new(),
            runtime: None,
            rating: None,
            comments: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn with_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actors = actors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_runtime(mut self, minutes: u32) -> Self {
        self.runtime = Some(minutes);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn into_ref(self) -> ArticleRef {
        Rc::new(RefCell::new(self))
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn date(&self) -> i32 {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn first_para(&self) -> &str {
        &self.first_para
    }

    pub fn hyperlink(&self) -> &str {
        &self.hyperlink
    }

    pub fn image_hyperlink(&self) -> &str {
        &self.image_hyperlink
    }

    pub fn director(&self) -> Option<&str> {
        self.director.as_deref()
    }

    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn runtime(&self) -> Option<u32> {
        self.runtime
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    pub fn comments(&self) -> &[CommentRef] {
        &self.comments
    }

    pub fn tags(&self) -> &[TagRef] {
        &self.tags
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
    }

    pub fn number_of_tags(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if a tag with the same name as `tag` is on this article.
    pub fn is_tagged_by(&self, tag: &TagRef) -> bool {
        let target = tag.borrow();
        self.tags.iter().any(|own| *own.borrow() == *target)
    }

    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Returns `true` if any tag on this article is called `tag_name`.
    pub fn has_tag_named(&self, tag_name: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.borrow().tag_name() == Some(tag_name))
    }

    pub(crate) fn add_comment(&mut self, comment: CommentRef) {
        self.comments.push(comment);
    }

    pub(crate) fn remove_comment(&mut self, comment: &CommentRef) {
        self.comments.retain(|own| !Rc::ptr_eq(own, comment));
    }

    pub(crate) fn add_tag(&mut self, tag: TagRef) {
        self.tags.push(tag);
    }
}

impl fmt::Debug for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.id)
            .field("date", &self.date)
            .field("title", &self.title)
            .field("comments", &self.comments.len())
            .field("tags", &self.tags.len())
            .finish_non_exhaustive()
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.title == other.title
            && self.first_para == other.first_para
            && self.hyperlink == other.hyperlink
            && self.image_hyperlink == other.image_hyperlink
    }
}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.date.cmp(&other.date) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}
