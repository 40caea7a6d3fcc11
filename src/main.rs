//! # Moodify
//!
//! Detects the mood of a phrase and turns it into a playlist.
//!
//! ## Usage
//!
//! ```bash
//! # Detect a mood
//! moodify detect "gym workout pump up"
//!
//! # Classify a transcript, one phrase per line
//! moodify detect --file transcript.txt
//!
//! # Search and print the playlist
//! moodify search "something romantic for date night"
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodify::classifier::{Classification, DetectionPreset, MoodClassifier};
use moodify::concert;
use moodify::config::{self, Settings};
use moodify::favorites::FavoritesStore;
use moodify::{cli, completion};
use moodify::media::{sample_playlist, MediaItem};
use moodify::mood::MoodCategory;
use moodify::provider::{PlaylistProvider, SampleCatalog, SearchResponseFile};
use moodify::session::MoodSession;
use std::fs;
use std::path::Path;

/// Resolve settings and command-line overrides into a classifier.
fn build_classifier(settings: &Settings, options: &cli::DetectOptions) -> Result<MoodClassifier> {
    resolve_classifier(settings.clone(), options)
}

/// Same as [`build_classifier`], but starting from the lenient preset unless
/// the command line names one.
fn build_voice_classifier(settings: &Settings, options: &cli::DetectOptions) -> Result<MoodClassifier> {
    let mut settings = settings.clone();
    if options.preset.is_none() {
        settings.preset = DetectionPreset::Lenient;
    }
    resolve_classifier(settings, options)
}

fn resolve_classifier(mut settings: Settings, options: &cli::DetectOptions) -> Result<MoodClassifier> {
    if let Some(preset) = options.preset {
        settings.preset = preset;
        // a preset on the command line brings its own threshold
        settings.minimum_score = None;
    }
    if let Some(minimum) = options.min_score {
        settings.minimum_score = Some(minimum);
    }
    if let Some(rules) = &options.rules {
        settings.rules_file = Some(rules.clone());
    }
    debug!("Effective detection settings: {settings:?}");
    settings.classifier()
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    }
}

fn provider_for(catalog: Option<&Path>) -> Box<dyn PlaylistProvider> {
    match catalog {
        Some(path) => Box::new(SearchResponseFile::new(path)),
        None => Box::new(SampleCatalog::new()),
    }
}

fn open_favorites() -> Result<FavoritesStore> {
    Ok(FavoritesStore::open(config::get_favorites_path()?))
}

fn print_classification(text: &str, result: &Classification, verbose: bool) {
    match result.mood {
        Some(mood) => println!("{} {}", mood.emoji(), mood.name()),
        None => println!("none"),
    }
    if !verbose {
        return;
    }
    for hit in &result.matches {
        println!("  keyword '{}' -> {} (+{})", hit.phrase, hit.mood.name(), hit.weight);
    }
    for mood in MoodCategory::ALL {
        let score = result.score_of(mood);
        if score > 0 {
            println!("  score {:<10} {score}", mood.name());
        }
    }
    match result.source {
        Some(source) => println!("  decided by: {source:?}"),
        None => println!("  no mood in: {text}"),
    }
}

fn print_playlist(items: &[MediaItem]) {
    for (i, item) in items.iter().enumerate() {
        let heart = if item.is_favorite { "♥" } else { " " };
        println!("{heart} {:>2}. {} - {} [{}]", i + 1, item.title, item.artist, item.duration);
        println!("       {}", item.video_url);
    }
}

/// Main entry point for the Moodify application.
///
/// Initializes logging, parses command-line arguments, and routes commands.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodify detect ...` - Show detection decisions
/// - `RUST_LOG=moodify::classifier=trace moodify detect ...` - Every keyword hit
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Detect { text, file, options, json, verbose } => {
            let settings = load_settings(args.config.as_deref())?;
            let classifier = build_classifier(&settings, &options)?;

            if let Some(path) = file {
                info!("Classifying lines from: {}", path.display());
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let lines: Vec<&str> = content.lines().collect();
                for (line, mood) in lines.iter().zip(classifier.classify_all(&lines)) {
                    let name = mood.map_or("none", MoodCategory::name);
                    println!("{name}\t{line}");
                }
                return Ok(());
            }

            let text = text.join(" ");
            let result = classifier.classify_detailed(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_classification(&text, &result, verbose);
            }
        }
        cli::Command::Moods => {
            for mood in MoodCategory::ALL {
                println!("{} {:<10} {}", mood.emoji(), mood.name(), mood.description());
                println!("   query: {}", mood.search_query());
            }
        }
        cli::Command::Query { mood } => {
            println!("{}", mood.search_query());
        }
        cli::Command::Search { text, voice, catalog, options } => {
            let settings = load_settings(args.config.as_deref())?;
            let text = text.join(" ");

            let session = MoodSession::new(provider_for(catalog.as_deref()))
                .with_favorites(open_favorites()?);
            let session = if voice {
                let mut session =
                    session.with_voice_classifier(build_voice_classifier(&settings, &options)?);
                session.voice_search(&text);
                session
            } else {
                let mut session = session.with_classifier(build_classifier(&settings, &options)?);
                session.search(&text);
                session
            };

            if let Some(feedback) = session.voice_feedback() {
                println!("{feedback}");
            }
            if let Some(status) = session.status() {
                println!("{status}");
            }
            print_playlist(session.playlist());
        }
        cli::Command::Shuffle { catalog } => {
            let mut session = MoodSession::new(provider_for(catalog.as_deref()))
                .with_favorites(open_favorites()?);
            let mood = session.shuffle_to_random_mood(&mut rand::thread_rng());
            println!("{} {}", mood.emoji(), mood.label());
            if let Some(status) = session.status() {
                println!("{status}");
            }
            print_playlist(session.playlist());
        }
        cli::Command::Favorites { action } => {
            let mut store = open_favorites()?;
            match action {
                cli::FavoritesAction::List => {
                    if store.items().is_empty() {
                        println!("No favorites yet");
                    }
                    for item in store.items() {
                        println!("{:<12} {} - {}", item.id, item.title, item.artist);
                    }
                }
                cli::FavoritesAction::Add { mood, position } => {
                    let playlist = sample_playlist(mood);
                    let item = position
                        .checked_sub(1)
                        .and_then(|i| playlist.get(i))
                        .ok_or_else(|| anyhow::anyhow!(
                            "Position {position} is out of range (1-{}) for the {} playlist",
                            playlist.len(),
                            mood.name()
                        ))?;
                    if store.add(item)? {
                        println!("Added {} - {}", item.title, item.artist);
                    } else {
                        println!("Already a favorite: {}", item.title);
                    }
                }
                cli::FavoritesAction::Remove { id } => {
                    if store.remove(&id)? {
                        println!("Removed {id}");
                    } else {
                        return Err(anyhow::anyhow!("No favorite with id '{id}'"));
                    }
                }
                cli::FavoritesAction::Clear => {
                    store.clear()?;
                    println!("Favorites cleared");
                }
            }
        }
        cli::Command::Concerts { artist, city, json } => {
            let concerts = concert::search_concerts(artist.as_deref(), city.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&concerts)?);
                return Ok(());
            }
            for show in &concerts {
                println!("{} at {}, {} ({})", show.artist_name, show.venue_name, show.city, show.when());
                if let Some(price) = &show.price_range {
                    println!("   {price}  {}", show.ticket_url);
                }
            }
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::CompletionEnhanced => {
            completion::generate_enhanced_bash_completion();
        }
        cli::Command::CompleteFavorites => {
            completion::print_favorite_completions();
        }
    }

    Ok(())
}
