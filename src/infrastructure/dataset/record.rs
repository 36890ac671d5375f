//! One row of the movie dataset.

use serde::Deserialize;

/// A movie row as found in the CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Runtime (Minutes)", default)]
    pub runtime_minutes: Option<i64>,
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
}

impl MovieRecord {
    /// Actor names from the comma-separated `Actors` column.
    pub fn actor_names(&self) -> impl Iterator<Item = &str> {
        split_list(&self.actors)
    }

    /// Genre names from the comma-separated `Genre` column.
    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        split_list(&self.genre)
    }
}

/// Splits a comma-separated column, trimming entries and skipping empty ones.
fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
