//! Tag entity and its applied-articles collection.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use super::name::{NameIdentity, NormalizedName};
use super::{Article, ArticleRef, TagRef};

/// A label applied to articles.
///
/// Articles are held weakly: an article owns its tags, while a tag only points back
/// at the articles it has been applied to. Duplicates are prevented by
/// [`crate::domain::make_tag_association`], not by the tag itself.
pub struct Tag {
    name: NormalizedName,
    tagged_articles: Vec<Weak<RefCell<Article>>>,
}

impl Tag {
    /// Creates a tag. Empty input yields a nameless tag.
    pub fn new(name: &str) -> Self {
        Self {
            name: NormalizedName::parse(name),
            tagged_articles: Vec::new(),
        }
    }

    pub fn into_ref(self) -> TagRef {
        Rc::new(RefCell::new(self))
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Articles this tag was applied to, in application order.
    ///
    /// Articles that have since been dropped are skipped.
    pub fn tagged_articles(&self) -> Vec<ArticleRef> {
        self.tagged_articles.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn number_of_tagged_articles(&self) -> usize {
        self.tagged_articles
            .iter()
            .filter(|article| article.strong_count() > 0)
            .count()
    }

    /// Returns `true` if an article equal to `article` carries this tag.
    pub fn is_applied_to(&self, article: &ArticleRef) -> bool {
        let target = article.borrow();
        self.tagged_articles
            .iter()
            .filter_map(Weak::upgrade)
            .any(|tagged| *tagged.borrow() == *target)
    }

    pub(crate) fn add_article(&mut self, article: &ArticleRef) {
        self.tagged_articles.push(Rc::downgrade(article));
    }
}

impl NameIdentity for Tag {
    fn identity(&self) -> &NormalizedName {
        &self.name
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name.as_deref())
            .field("tagged_articles", &self.tagged_articles.len())
            .finish()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{BTreeSet, HashSet};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn article(date: i32, title: &str) -> ArticleRef {
        Article::new(date, title, "", "", "").into_ref()
    }

    #[test]
    fn test_tag_creation() {
        let tag = Tag::new(" Sci-Fi ");
        assert_eq!(tag.tag_name(), Some("Sci-Fi"));
        assert_eq!(tag.number_of_tagged_articles(), 0);
    }

    #[test]
    fn test_tag_equality_by_name_only() {
        let mut applied = Tag::new("Action");
        applied.add_article(&article(2014, "Guardians of the Galaxy"));

        assert_eq!(applied, Tag::new("Action"));
        assert_ne!(applied, Tag::new("Adventure"));
    }

    #[test]
    fn test_is_applied_to_uses_article_equality() {
        let guardians = article(2014, "Guardians of the Galaxy");
        let mut tag = Tag::new("Action");
        tag.add_article(&guardians);

        assert!(tag.is_applied_to(&guardians));
        assert!(tag.is_applied_to(&article(2014, "Guardians of the Galaxy")));
        assert!(!tag.is_applied_to(&article(2016, "Split")));
    }

    #[test]
    fn test_dropped_articles_are_not_counted() {
        let mut tag = Tag::new("Horror");
        let kept = article(2016, "Split");
        {
            let dropped = article(2016, "The Conjuring 2");
            tag.add_article(&dropped);
        }
        tag.add_article(&kept);

        assert_eq!(tag.number_of_tagged_articles(), 1);
        assert_eq!(tag.tagged_articles().len(), 1);
    }

    #[test]
    fn test_tag_trim_equality_and_hash() {
        let padded = Tag::new("Action ");
        let plain = Tag::new("Action");

        assert_eq!(padded, plain);
        assert_eq!(hash_of(&padded), hash_of(&plain));

        let tags: HashSet<Tag> = [padded, plain].into_iter().collect();
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_tag_sorted_container() {
        let tags: BTreeSet<Tag> = ["Drama", "Action", "Comedy", "Action "]
            .into_iter()
            .map(Tag::new)
            .collect();

        let names: Vec<_> = tags.iter().filter_map(|t| t.tag_name()).collect();
        assert_eq!(names, vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_nameless_tag_sorts_first() {
        let mut tags = vec![Tag::new("Sci-Fi"), Tag::new(""), Tag::new("Horror")];
        tags.sort();

        assert_eq!(tags[0].tag_name(), None);
        assert_eq!(tags[1].tag_name(), Some("Horror"));
    }
}
