//! Movies, actors, directors and genres built from dataset rows.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::MovieRecord;
use crate::domain::entities::{Actor, Director, Genre, Movie, NameIdentity, NormalizedName};

/// The distinct movies, actors, directors and genres of a dataset.
///
/// Movies are deduplicated by `(title, year)`; the first row wins. Actors in
/// [`MovieDataset::actors`] carry their colleagues: everyone they share a movie with,
/// recorded on both sides. The actor copies held by each [`Movie`] carry no colleagues.
#[derive(Debug, Default)]
pub struct MovieDataset {
    movies: HashSet<Movie>,
    actors: HashSet<Actor>,
    directors: HashSet<Director>,
    genres: HashSet<Genre>,
}

impl MovieDataset {
    pub fn from_records(records: &[MovieRecord]) -> Self {
        let mut movies = HashSet::new();
        let mut actors: HashMap<NormalizedName, Actor> = HashMap::new();
        let mut directors = HashSet::new();
        let mut genres = HashSet::new();

        for record in records {
            let mut movie = Movie::new(&record.title, record.year);

            let director = Director::new(&record.director);
            if !director.is_nameless() {
                movie.set_director(director.clone());
                directors.insert(director);
            }

            if let Some(description) = &record.description {
                movie.set_description(description);
            }

            if let Some(minutes) = record.runtime_minutes
                && let Err(e) = movie.set_runtime_minutes(minutes)
            {
                warn!(title = %record.title, error = %e, "Skipping invalid runtime");
            }

            let cast: Vec<Actor> = record.actor_names().map(Actor::new).collect();
            for actor in &cast {
                movie.add_actor(actor.clone());

                let known = actors
                    .entry(actor.identity().clone())
                    .or_insert_with(|| actor.clone());
                for colleague in cast.iter().filter(|other| *other != actor) {
                    known.add_colleague(colleague);
                }
            }

            for genre in record.genre_names().map(Genre::new) {
                movie.add_genre(genre.clone());
                genres.insert(genre);
            }

            if !movies.insert(movie) {
                debug!(title = %record.title, year = record.year, "Duplicate movie row ignored");
            }
        }

        Self {
            movies,
            actors: actors.into_values().collect(),
            directors,
            genres,
        }
    }

    pub fn movies(&self) -> &HashSet<Movie> {
        &self.movies
    }

    pub fn actors(&self) -> &HashSet<Actor> {
        &self.actors
    }

    pub fn directors(&self) -> &HashSet<Director> {
        &self.directors
    }

    pub fn genres(&self) -> &HashSet<Genre> {
        &self.genres
    }

    /// Movies ordered by title, then year.
    pub fn sorted_movies(&self) -> Vec<&Movie> {
        let mut movies: Vec<_> = self.movies.iter().collect();
        movies.sort();
        movies
    }

    /// Looks up an actor (with colleagues) by name.
    pub fn find_actor(&self, name: &str) -> Option<&Actor> {
        self.actors.get(&Actor::new(name))
    }
}
