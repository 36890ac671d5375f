mod common;

use newsreel::AppError;
use newsreel::domain::entities::{Article, ArticleRef, User};
use newsreel::domain::repositories::{
    ArticleRepository, CommentRepository, TagRepository, UserRepository,
};
use newsreel::infrastructure::persistence::MemoryRepository;
use std::rc::Rc;

fn ids(articles: &[ArticleRef]) -> Vec<Option<i64>> {
    articles.iter().map(|article| article.borrow().id()).collect()
}

#[test]
fn test_fixture_article_count() {
    let repo = common::create_test_repository();

    assert_eq!(repo.count_articles().unwrap(), 6);
}

#[test]
fn test_first_and_last_article() {
    let repo = common::create_test_repository();

    let first = repo.first_article().unwrap().unwrap();
    let last = repo.last_article().unwrap().unwrap();

    assert_eq!(first.borrow().id(), Some(1));
    assert_eq!(last.borrow().id(), Some(6));
}

#[test]
fn test_find_article_copies_row_fields() {
    let repo = common::create_test_repository();

    let article = repo.find_article(1).unwrap().unwrap();
    let article = article.borrow();

    assert_eq!(article.title(), "Guardians of the Galaxy");
    assert_eq!(article.date(), 2014);
    assert_eq!(article.director(), Some("James Gunn"));
    assert_eq!(article.actors().len(), 4);
    assert_eq!(article.runtime(), Some(121));
    assert_eq!(article.number_of_tags(), 3);
    assert!(article.has_tag_named("Sci-Fi"));
}

#[test]
fn test_find_article_not_found() {
    let repo = common::create_test_repository();

    assert!(repo.find_article(7).unwrap().is_none());
}

#[test]
fn test_articles_by_date_keep_insertion_order() {
    let repo = common::create_test_repository();

    let articles = repo.find_articles_by_date(2016).unwrap();

    assert_eq!(ids(&articles), vec![Some(4), Some(5), Some(6)]);
    assert!(repo.find_articles_by_date(2000).unwrap().is_empty());
}

#[test]
fn test_previous_and_next_dates() {
    let repo = common::create_test_repository();

    let mad_max = repo.find_article(3).unwrap().unwrap();
    let guardians = repo.find_article(1).unwrap().unwrap();
    let passengers = repo.find_article(6).unwrap().unwrap();

    assert_eq!(repo.previous_date(&mad_max).unwrap(), Some(2014));
    assert_eq!(repo.next_date(&mad_max).unwrap(), Some(2016));
    assert_eq!(repo.previous_date(&guardians).unwrap(), None);
    assert_eq!(repo.next_date(&passengers).unwrap(), None);
}

#[test]
fn test_articles_by_ids_skip_unknown() {
    let repo = common::create_test_repository();

    let articles = repo.find_articles_by_ids(&[8, 6, 7, 5, 5]).unwrap();

    assert_eq!(ids(&articles), vec![Some(5), Some(6)]);
}

#[test]
fn test_article_ids_for_tag() {
    let repo = common::create_test_repository();

    assert_eq!(
        repo.find_article_ids_for_tag("Adventure").unwrap(),
        vec![1, 2, 3, 6]
    );
    assert_eq!(repo.find_article_ids_for_tag("Horror").unwrap(), vec![4]);
    assert!(repo.find_article_ids_for_tag("Western").unwrap().is_empty());
}

#[test]
fn test_search_by_title_is_case_insensitive() {
    let repo = common::create_test_repository();

    let found = repo.search_articles_by_title("GALAXY").unwrap();
    assert_eq!(ids(&found), vec![Some(1)]);

    // Every title but "Mad Max: Fury Road" contains an "s".
    let found = repo.search_articles_by_title("S").unwrap();
    assert_eq!(found.len(), 5);
}

#[test]
fn test_genre_tags_are_shared() {
    let repo = common::create_test_repository();

    assert_eq!(repo.all_tags().unwrap().len(), 10);

    let action = repo.find_tag("Action").unwrap().unwrap();
    assert_eq!(action.borrow().number_of_tagged_articles(), 2);

    let guardians = repo.find_article(1).unwrap().unwrap();
    assert!(guardians.borrow().is_tagged_by(&action));
}

#[test]
fn test_add_article_with_new_id() {
    let repo = common::create_test_repository();
    let article = Article::new(2017, "Logan", "", "", "").with_id(7).into_ref();

    repo.add_article(Rc::clone(&article)).unwrap();

    assert_eq!(repo.count_articles().unwrap(), 7);
    assert!(Rc::ptr_eq(&repo.find_article(7).unwrap().unwrap(), &article));
    assert!(Rc::ptr_eq(&repo.last_article().unwrap().unwrap(), &article));
}

#[test]
fn test_add_article_with_taken_id() {
    let repo = common::create_test_repository();
    let article = Article::new(2017, "Logan", "", "", "").with_id(3).into_ref();

    let result = repo.add_article(article);

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[test]
fn test_users_and_comments() {
    let repo = common::create_test_repository();
    common::seed_users_and_comments(&repo);

    assert_eq!(repo.count_users().unwrap(), 2);
    assert_eq!(repo.count_comments().unwrap(), 2);

    let fmercury = repo.find_user("fmercury").unwrap().unwrap();
    assert_eq!(fmercury.borrow().number_of_comments(), 1);
    assert!(repo.find_user("prince").unwrap().is_none());

    let comments = repo.all_comments().unwrap();
    assert_eq!(comments[0].username().as_deref(), Some("fmercury"));
    assert_eq!(comments[1].username().as_deref(), Some("thorke"));
}

#[test]
fn test_add_user_with_taken_name() {
    let repo = MemoryRepository::new();
    repo.add_user(User::new("Dave", "123456789").into_ref()).unwrap();

    let result = repo.add_user(User::new("Dave", "987654321").into_ref());

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(repo.count_users().unwrap(), 1);
}
