// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use waypost::{
    load_listing, load_more_listing, load_post_page, AppError, Command, CommandLineInput,
    ContentStore, HttpContentStore, ListingState, PostPage, PostSummary, ResolvedConfig,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("waypost.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn format_date(summary: &PostSummary) -> String {
    summary
        .published_at
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "unpublished".to_string())
}

fn print_listing(state: &ListingState) {
    for post in state.items() {
        println!("{}  {}", format_date(post), post.title);
        println!("    {}", post.subtitle);
        println!("    by {}  ({})", post.author, post.uid);
    }
    if state.has_more() {
        println!("... more posts available");
    }
}

fn print_post(page: &PostPage) {
    let summary = &page.detail.summary;
    println!("# {}", summary.title);
    println!(
        "{} · {} · {} min read",
        format_date(summary),
        summary.author,
        page.reading_minutes
    );
    if let Some(edited) = page.detail.last_edited_at {
        println!("edited {}", edited.format("%d %b %Y %H:%M"));
    }
    println!("banner: {}", page.detail.banner.url);
    for section in &page.sections {
        println!();
        println!("## {}", section.heading);
        println!("{}", section.html);
    }
    println!();
    if let Some(previous) = &page.neighbors.previous {
        println!("← previous: {} ({})", previous.title, previous.uid);
    }
    if let Some(next) = &page.neighbors.next {
        println!("→ next: {} ({})", next.title, next.uid);
    }
}

async fn run(cli: &CommandLineInput, config: &ResolvedConfig) -> Result<(), AppError> {
    let store = HttpContentStore::new(config.endpoint.as_str(), config.access_token.clone())?;
    let store: &dyn ContentStore = &store;
    let preview = config.preview_ref.as_ref();

    match &cli.command {
        Command::List { more } => {
            let mut state = load_listing(store, preview).await?;
            for _ in 0..*more {
                if !state.has_more() {
                    break;
                }
                state = load_more_listing(store, &state, preview).await?;
            }
            print_listing(&state);
        }
        Command::Show { uid } => {
            let uid = waypost::PostUid::parse(uid)?;
            let page = load_post_page(store, &uid, preview).await?;
            print_post(&page);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ResolvedConfig::resolve(&cli)?;

    if let Err(err) = run(&cli, &config).await {
        if err.is_not_found() {
            eprintln!("Not found: {}", err);
            std::process::exit(2);
        }
        return Err(err.into());
    }

    Ok(())
}
