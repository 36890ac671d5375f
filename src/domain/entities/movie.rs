//! Movie entity with validated fields and actor/genre collections.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::name::{push_unique, remove_by_name};
use super::{Actor, Director, Genre};
use crate::domain::error::ModelError;

/// Earliest release year accepted for a movie.
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// A movie identified by its title and release year.
///
/// Title and release year are validated on construction and on every setter: an empty
/// title or a year before [`MIN_RELEASE_YEAR`] leaves the field `None` instead of
/// failing. The runtime is the exception: [`Movie::set_runtime_minutes`] rejects
/// non-positive values with an error.
///
/// Equality and hashing use `(title, release_year)` only; ordering is by title, then
/// year.
#[derive(Debug, Clone)]
pub struct Movie {
    title: Option<String>,
    release_year: Option<i32>,
    description: Option<String>,
    director: Option<Director>,
    runtime_minutes: Option<u32>,
    actors: Vec<Actor>,
    genres: Vec<Genre>,
}

fn validate_title(title: &str) -> Option<String> {
    if title.is_empty() {
        None
    } else {
        Some(title.trim().to_string())
    }
}

fn validate_release_year(release_year: i32) -> Option<i32> {
    (release_year >= MIN_RELEASE_YEAR).then_some(release_year)
}

impl Movie {
    pub fn new(title: &str, release_year: i32) -> Self {
        Self {
            title: validate_title(title),
            release_year: validate_release_year(release_year),
            description: None,
            director: None,
            runtime_minutes: None,
            actors: Vec::new(),
            genres: Vec::new(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = validate_title(title);
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_year
    }

    pub fn set_release_year(&mut self, release_year: i32) {
        self.release_year = validate_release_year(release_year);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.trim().to_string());
    }

    pub fn director(&self) -> Option<&Director> {
        self.director.as_ref()
    }

    pub fn set_director(&mut self, director: Director) {
        self.director = Some(director);
    }

    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_minutes
    }

    /// Sets the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidRuntime`] if `minutes` is not a positive number
    /// that fits in `u32`. The previous runtime is kept.
    pub fn set_runtime_minutes(&mut self, minutes: i64) -> Result<(), ModelError> {
        match u32::try_from(minutes) {
            Ok(valid) if valid > 0 => {
                self.runtime_minutes = Some(valid);
                Ok(())
            }
            _ => Err(ModelError::InvalidRuntime { minutes }),
        }
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// Adds an actor unless one with the same name is already cast.
    pub fn add_actor(&mut self, actor: Actor) -> bool {
        push_unique(&mut self.actors, actor)
    }

    pub fn remove_actor(&mut self, actor: &Actor) -> bool {
        remove_by_name(&mut self.actors, actor)
    }

    /// Adds a genre unless one with the same name is already present.
    pub fn add_genre(&mut self, genre: Genre) -> bool {
        push_unique(&mut self.genres, genre)
    }

    pub fn remove_genre(&mut self, genre: &Genre) -> bool {
        remove_by_name(&mut self.genres, genre)
    }

    fn identity(&self) -> (Option<&str>, Option<i32>) {
        (self.title.as_deref(), self.release_year)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}
