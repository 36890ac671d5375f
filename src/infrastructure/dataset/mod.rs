//! Movie dataset ingestion.
//!
//! The dataset is a CSV file with at least the columns
//! `Title, Year, Director, Actors, Genre`; `Description`, `Runtime (Minutes)` and
//! `Rating` are picked up when present. `Actors` and `Genre` hold comma-separated
//! lists.
//!
//! - [`MovieFileReader`] - Reads rows into [`MovieRecord`]s
//! - [`MovieDataset`] - Movies, actors, directors and genres built from the rows
//! - [`load_articles`] - Populates the article catalogue from the same rows

mod article_loader;
mod movie_dataset;
mod movie_file_reader;
mod record;

pub use article_loader::load_articles;
pub use movie_dataset::MovieDataset;
pub use movie_file_reader::{DatasetError, MovieFileReader};
pub use record::MovieRecord;
