#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use newsreel::application::services::{AuthService, NewsService};
use newsreel::domain::entities::User;
use newsreel::domain::make_comment_at;
use newsreel::domain::repositories::{ArticleRepository, CommentRepository, UserRepository};
use newsreel::infrastructure::dataset::{MovieFileReader, MovieRecord, load_articles};
use newsreel::infrastructure::persistence::MemoryRepository;
use std::path::PathBuf;
use std::rc::Rc;

pub type TestNewsService = NewsService<MemoryRepository, MemoryRepository, MemoryRepository>;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("movies.csv")
}

pub fn fixture_records() -> Vec<MovieRecord> {
    MovieFileReader::new(fixture_path()).read_records().unwrap()
}

/// Repository holding the six fixture articles and their genre tags.
pub fn create_test_repository() -> Rc<MemoryRepository> {
    let repo = Rc::new(MemoryRepository::new());
    load_articles(&fixture_records(), repo.as_ref(), repo.as_ref()).unwrap();
    repo
}

/// Adds users `thorke` and `fmercury` and their two comments on article 1.
pub fn seed_users_and_comments(repo: &MemoryRepository) {
    let thorke = User::new("thorke", "cLQ^C#oFXloS").into_ref();
    let fmercury = User::new("fmercury", "mvNNbc1eLA$i").into_ref();
    repo.add_user(Rc::clone(&thorke)).unwrap();
    repo.add_user(Rc::clone(&fmercury)).unwrap();

    let guardians = repo.find_article(1).unwrap().unwrap();
    let first = make_comment_at(
        "Oh no, COVID-19 has hit New Zealand",
        &fmercury,
        &guardians,
        Utc.with_ymd_and_hms(2020, 2, 28, 11, 28, 0).unwrap(),
    );
    let second = make_comment_at(
        "Yeah Freddie, bad news",
        &thorke,
        &guardians,
        Utc.with_ymd_and_hms(2020, 2, 28, 11, 30, 0).unwrap(),
    );
    repo.add_comment(first).unwrap();
    repo.add_comment(second).unwrap();
}

pub fn create_test_news_service(repo: &Rc<MemoryRepository>) -> TestNewsService {
    NewsService::new(Rc::clone(repo), Rc::clone(repo), Rc::clone(repo))
}

pub fn create_test_auth_service(repo: &Rc<MemoryRepository>) -> AuthService<MemoryRepository> {
    AuthService::new(Rc::clone(repo), "test-signing-secret".to_string())
}
