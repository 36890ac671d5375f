//! Populates the article catalogue from dataset rows.

use std::collections::HashMap;

use tracing::{info, warn};

use super::MovieRecord;
use crate::domain::entities::{Article, Tag, TagRef};
use crate::domain::make_tag_association;
use crate::domain::repositories::{ArticleRepository, TagRepository};
use crate::error::AppError;

/// Turns each row into an article and stores it along with one tag per genre.
///
/// Article ids are the 1-based row numbers and the date is the release year. The
/// description becomes the first paragraph; director, actors, runtime and rating are
/// copied over. Genres with the same name share a single [`Tag`].
///
/// Loaded articles have no hyperlinks, so two rows with the same year, title and
/// description produce equal articles. A shared tag is applied only once per equal
/// article, which leaves the later row's article without those genres.
///
/// Returns the number of articles stored.
///
/// # Errors
///
/// Propagates repository errors, e.g. [`AppError::Conflict`] when an article id or
/// tag name is already stored.
pub fn load_articles<A, T>(
    records: &[MovieRecord],
    articles: &A,
    tags: &T,
) -> Result<usize, AppError>
where
    A: ArticleRepository + ?Sized,
    T: TagRepository + ?Sized,
{
    let mut tag_index: HashMap<String, TagRef> = HashMap::new();
    let mut new_tags: Vec<TagRef> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let id = index as i64 + 1;

        let mut article = Article::new(
            record.year,
            record.title.trim(),
            record.description.as_deref().unwrap_or_default().trim(),
            "",
            "",
        )
        .with_id(id)
        .with_actors(record.actor_names());

        let director = record.director.trim();
        if !director.is_empty() {
            article = article.with_director(director);
        }
        if let Some(minutes) = record.runtime_minutes.and_then(|m| u32::try_from(m).ok())
            && minutes > 0
        {
            article = article.with_runtime(minutes);
        }
        if let Some(rating) = record.rating {
            article = article.with_rating(rating);
        }

        let article = article.into_ref();

        for genre in record.genre_names() {
            let tag = tag_index.entry(genre.to_string()).or_insert_with(|| {
                let tag = Tag::new(genre).into_ref();
                new_tags.push(tag.clone());
                tag
            });

            if let Err(e) = make_tag_association(&article, tag) {
                if article.borrow().is_tagged_by(tag) {
                    warn!(id, error = %e, "Skipping repeated genre");
                } else {
                    warn!(id, error = %e, "Skipping genre already applied to an equal article");
                }
            }
        }

        articles.add_article(article)?;
    }

    let tag_count = new_tags.len();
    for tag in new_tags {
        tags.add_tag(tag)?;
    }

    info!(articles = records.len(), tags = tag_count, "Article catalogue loaded");
    Ok(records.len())
}
