//! Command-line browser for the newsreel catalogue.
//!
//! Loads the movie dataset into an in-memory repository and runs one query against it.
//!
//! # Usage
//!
//! ```bash
//! # Dataset summary
//! cargo run -- movies
//!
//! # Browse articles
//! cargo run -- first
//! cargo run -- article 3
//! cargo run -- date 2014
//! cargo run -- tag Action
//! cargo run -- search galaxy
//!
//! # Post a comment as a freshly registered user
//! cargo run -- comment 3 --user fmercury --password Bohemian1 "Loved it"
//!
//! # Machine-readable output
//! cargo run -- --json last
//! ```
//!
//! # Environment Variables
//!
//! See [`newsreel::config`].

use newsreel::AppError;
use newsreel::application::services::{AuthService, NewsService};
use newsreel::config::{self, Config};
use newsreel::domain::repositories::TagRepository;
use newsreel::dto::{ArticleView, CommentView, DatedArticles, TagView};
use newsreel::infrastructure::dataset::{MovieDataset, MovieFileReader, load_articles};
use newsreel::infrastructure::persistence::MemoryRepository;
use newsreel::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use std::rc::Rc;

/// Browse the movie article catalogue.
#[derive(Parser)]
#[command(name = "newsreel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show movie, actor, director and genre counts
    Movies,

    /// Show an actor and the actors they worked with
    Actor {
        /// Full name, e.g. "Chris Pratt"
        name: String,
    },

    /// Show one article
    Article { id: i64 },

    /// Show the earliest article
    First,

    /// Show the latest article
    Last,

    /// List the articles of one year, with the neighbouring years
    Date { year: i32 },

    /// List the articles carrying a tag
    Tag { name: String },

    /// Search article titles (case-insensitive)
    Search { title: String },

    /// List all tags with their article counts
    Tags,

    /// Register a user and post a comment on an article
    Comment {
        /// Article id
        id: i64,

        #[arg(short, long)]
        user: String,

        #[arg(short, long)]
        password: String,

        /// Comment text
        text: String,
    },
}

/// Repositories and services over the loaded catalogue.
struct Catalogue {
    repository: Rc<MemoryRepository>,
    news: NewsService<MemoryRepository, MemoryRepository, MemoryRepository>,
    auth: AuthService<MemoryRepository>,
    dataset: MovieDataset,
}

impl Catalogue {
    fn load(config: &Config) -> Result<Self> {
        let reader = MovieFileReader::new(&config.movies_path);
        let records = reader
            .read_records()
            .with_context(|| format!("Failed to load {}", config.movies_path.display()))?;

        let repository = Rc::new(MemoryRepository::new());
        load_articles(&records, repository.as_ref(), repository.as_ref())
            .context("Failed to build catalogue")?;

        let news = NewsService::new(
            Rc::clone(&repository),
            Rc::clone(&repository),
            Rc::clone(&repository),
        );
        let auth = AuthService::new(Rc::clone(&repository), config.signing_secret.clone());

        Ok(Self {
            repository,
            news,
            auth,
            dataset: MovieDataset::from_records(&records),
        })
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_from_env()?;
    telemetry::init_tracing(&config)?;
    config.print_summary();

    let catalogue = Catalogue::load(&config)?;

    match execute(&catalogue, cli.command, cli.json) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            report(&e, cli.json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Runs one command. Lookup failures come back as [`AppError`] for reporting.
fn execute(catalogue: &Catalogue, command: Commands, json: bool) -> Result<(), AppError> {
    let news = &catalogue.news;

    match command {
        Commands::Movies => emit(json, &summary(&catalogue.dataset), print_dataset),
        Commands::Actor { name } => {
            let actor = catalogue.dataset.find_actor(&name).ok_or_else(|| {
                AppError::not_found("Actor not found", serde_json::json!({ "name": name }))
            })?;
            let mut colleagues: Vec<String> = catalogue
                .dataset
                .actors()
                .iter()
                .filter(|other| actor.worked_with(other))
                .filter_map(|other| other.actor_name().map(str::to_string))
                .collect();
            colleagues.sort();

            let view = ActorView {
                name: actor.actor_name().unwrap_or_default().to_string(),
                colleague_count: actor.colleague_count(),
                colleagues,
            };
            emit(json, &view, print_actor)
        }
        Commands::Article { id } => emit(json, &news.get_article(id)?, print_article),
        Commands::First => emit(json, &news.get_first_article()?, print_article),
        Commands::Last => emit(json, &news.get_last_article()?, print_article),
        Commands::Date { year } => emit(json, &news.get_articles_by_date(year)?, print_dated),
        Commands::Tag { name } => {
            let ids = news.get_article_ids_for_tag(&name)?;
            emit(json, news.get_articles_by_ids(&ids)?.as_slice(), print_list)
        }
        Commands::Search { title } => {
            emit(json, news.search_articles_by_title(&title)?.as_slice(), print_list)
        }
        Commands::Tags => {
            let tags: Vec<TagView> = catalogue
                .repository
                .all_tags()?
                .iter()
                .map(|tag| TagView::from(&*tag.borrow()))
                .collect();
            emit(json, tags.as_slice(), print_tags)
        }
        Commands::Comment {
            id,
            user,
            password,
            text,
        } => {
            catalogue.auth.add_user(&user, &password)?;
            catalogue.auth.authenticate(&user, &password)?;
            news.add_comment(id, &text, &user)?;
            emit(json, news.get_comments_for_article(id)?.as_slice(), print_comments)
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DatasetSummary {
    movies: usize,
    actors: usize,
    directors: usize,
    genres: usize,
}

#[derive(Serialize)]
struct ActorView {
    name: String,
    colleague_count: usize,
    colleagues: Vec<String>,
}

fn summary(dataset: &MovieDataset) -> DatasetSummary {
    DatasetSummary {
        movies: dataset.movies().len(),
        actors: dataset.actors().len(),
        directors: dataset.directors().len(),
        genres: dataset.genres().len(),
    }
}

/// Prints `value` as pretty JSON or through `render`.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, render: fn(&T)) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    } else {
        render(value);
    }
}

fn report(error: &AppError, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&error.to_info())
            .context("Failed to serialise error")?;
        println!("{text}");
    } else {
        eprintln!(
            "{} {} ({})",
            "error:".red().bold(),
            error,
            error.code().bright_black()
        );
    }
    Ok(())
}

fn print_dataset(summary: &DatasetSummary) {
    println!("{}", "Dataset".bright_blue().bold());
    println!();
    println!("  Movies:    {}", summary.movies.to_string().bright_white().bold());
    println!("  Actors:    {}", summary.actors.to_string().bright_white().bold());
    println!("  Directors: {}", summary.directors.to_string().bright_white().bold());
    println!("  Genres:    {}", summary.genres.to_string().bright_white().bold());
}

fn print_actor(actor: &ActorView) {
    println!("{}", actor.name.bright_blue().bold());
    println!(
        "  Worked with {} actors",
        actor.colleague_count.to_string().bright_white().bold()
    );
    for colleague in &actor.colleagues {
        println!("    {}", colleague.cyan());
    }
}

fn print_article(article: &ArticleView) {
    let id = article.id.map(|id| id.to_string()).unwrap_or_default();

    println!(
        "{} {} {}",
        format!("#{id}").bright_black(),
        article.title.bright_blue().bold(),
        format!("({})", article.date).bright_black()
    );

    if let Some(director) = &article.director {
        println!("  Director: {}", director.cyan());
    }
    if !article.actors.is_empty() {
        println!("  Starring: {}", article.actors.join(", ").cyan());
    }
    if let Some(runtime) = article.runtime {
        println!("  Runtime:  {runtime} min");
    }
    if let Some(rating) = article.rating {
        println!("  Rating:   {}", format!("{rating:.1}").bright_yellow());
    }

    let tags: Vec<&str> = article
        .tags
        .iter()
        .filter_map(|tag| tag.name.as_deref())
        .collect();
    if !tags.is_empty() {
        println!("  Tags:     {}", tags.join(", ").green());
    }

    if !article.first_para.is_empty() {
        println!();
        println!("  {}", article.first_para);
    }

    if !article.comments.is_empty() {
        println!();
        print_comments(&article.comments);
    }
}

fn print_list(articles: &[ArticleView]) {
    if articles.is_empty() {
        println!("{}", "  No articles found".yellow());
        return;
    }

    for article in articles {
        let id = article.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "  {:<5} {} {}",
            id.bright_black(),
            article.title.cyan(),
            format!("({})", article.date).bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );
}

fn print_dated(dated: &DatedArticles) {
    let neighbour = |date: Option<i32>| date.map(|d| d.to_string()).unwrap_or_else(|| "-".into());

    println!("{}", format!("Articles from {}", dated.date).bright_blue().bold());
    println!(
        "  {} {}   {} {}",
        "previous:".bright_black(),
        neighbour(dated.previous_date),
        "next:".bright_black(),
        neighbour(dated.next_date)
    );
    println!();
    print_list(&dated.articles);
}

fn print_tags(tags: &[TagView]) {
    if tags.is_empty() {
        println!("{}", "  No tags found".yellow());
        return;
    }

    for tag in tags {
        println!(
            "  {:<20} {}",
            tag.name.as_deref().unwrap_or("<unnamed>").green(),
            tag.tagged_articles.len().to_string().bright_white()
        );
    }
}

fn print_comments(comments: &[CommentView]) {
    println!("{}", "Comments".bright_white().bold());

    for comment in comments {
        println!(
            "  {} {} {}",
            comment.timestamp.format("%Y-%m-%d %H:%M").to_string().bright_black(),
            comment.username.as_deref().unwrap_or("<deleted>").cyan(),
            comment.comment_text
        );
    }
}
