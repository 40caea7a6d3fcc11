//! Mood detection from free text, and playlists to match.
//!
//! Core modules:
//! - [`mood`] - The six mood categories and their catalog queries
//! - [`rules`] - Weighted keyword tables
//! - [`classifier`] - Keyword scoring with literal fallback
//! - [`provider`] - Playlist provider trait and offline providers
//! - [`session`] - Search orchestration and fallback playlists
//!
//! ### Supporting Modules
//!
//! - [`media`] - Playlist entries and sample playlists
//! - [`favorites`] - Favorite tracks persisted as JSON
//! - [`config`] - Data directory and settings file
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`concert`] - Upcoming concerts by artist and city
//!
//! ## Quick Start Example
//!
//! ```
//! use moodify::classifier::{classify, DetectionPreset, MoodClassifier};
//! use moodify::mood::MoodCategory;
//! use moodify::provider::SampleCatalog;
//! use moodify::session::MoodSession;
//!
//! // Main search bar: weighted table, score must reach 5
//! assert_eq!(
//!     classify("I want happy upbeat feel good songs", 5),
//!     Some(MoodCategory::Happy)
//! );
//!
//! // Voice screen: any keyword hit counts
//! let voice = MoodClassifier::from_preset(DetectionPreset::Lenient);
//! assert_eq!(voice.classify("some jazz"), Some(MoodCategory::Chill));
//!
//! // Detected moods become catalog queries
//! let mut session = MoodSession::new(SampleCatalog::new());
//! session.search("date night playlist");
//! assert_eq!(session.selected_mood(), MoodCategory::Romantic);
//! assert_eq!(session.playlist().len(), 5);
//! ```
//!
//! ## Algorithm Details
//!
//! 1. Lowercase the input.
//! 2. Every rule whose phrase is a substring adds its weight to its mood.
//! 3. The best mood wins if its score reaches the minimum; ties go to the
//!    mood declared first (`happy, sad, energetic, chill, angry, romantic`).
//! 4. Otherwise the first mood whose own name appears in the text wins.
//! 5. Otherwise there is no mood. This is not an error.
//!
//! ## Error Handling
//!
//! Classification never fails. Providers return a typed
//! [`provider::SearchError`]; application-level operations (settings,
//! favorites, rule files) return `anyhow::Result` with context.

pub mod classifier;
pub mod cli;
pub mod completion;
pub mod concert;
pub mod config;
pub mod favorites;
pub mod media;
pub mod mood;
pub mod provider;
pub mod rules;
pub mod session;
