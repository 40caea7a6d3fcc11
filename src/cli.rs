//! # Command-Line Interface Module
//!
//! Clap derive definitions for the `moodify` binary.
//!
//! ## Commands
//!
//! - `detect`: Detect the mood of a phrase (or of every line in a file)
//! - `moods`: List the available moods
//! - `query`: Print the catalog query used for a mood
//! - `search`: Run a full search and print the resulting playlist
//! - `shuffle`: Pick a random mood and print its playlist
//! - `favorites`: Manage favorite tracks
//! - `concerts`: Find upcoming concerts by artist or city
//!
//! ## Examples
//!
//! ```bash
//! moodify detect "I want happy upbeat feel good songs"
//! moodify detect --preset lenient "some jazz please"
//! moodify search --voice "put on something to cry to"
//! moodify favorites add chill 2
//! ```

use crate::classifier::DetectionPreset;
use crate::mood::MoodCategory;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser)]
#[command(name = "moodify")]
#[command(about = "Moodify: say how you feel, get a playlist")]
#[command(version)]
pub struct Args {
    /// Settings file (defaults to <config dir>/moodify/config.json)
    #[arg(long, global = true, env = "MOODIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Detection options shared by `detect` and `search`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DetectOptions {
    /// Detection preset: strict (weighted, score >= 5) or lenient (any hit)
    #[arg(long, value_enum)]
    pub preset: Option<DetectionPreset>,

    /// Override the preset's minimum score
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Custom keyword rules (JSON array of {mood, phrase, weight})
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub rules: Option<PathBuf>,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Detect the mood expressed by a phrase
    ///
    /// Prints the detected mood, or "none" when the text expresses none.
    /// With --file every line is classified and printed as `mood<TAB>line`.
    Detect {
        /// Words of the phrase to classify
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Vec<String>,

        /// Classify each line of this file instead
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: DetectOptions,

        /// Print the full classification as JSON
        #[arg(long)]
        json: bool,

        /// Show every keyword hit and per-mood scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// List all moods with their descriptions and catalog queries
    Moods,

    /// Print the catalog search query for a mood
    Query {
        /// happy, sad, energetic, chill, angry or romantic
        mood: MoodCategory,
    },

    /// Search for a playlist by phrase
    ///
    /// A detected mood loads that mood's playlist; otherwise the raw
    /// phrase is searched in the catalog.
    Search {
        /// Words of the search phrase
        #[arg(required = true)]
        text: Vec<String>,

        /// Use the voice-screen detection (lenient)
        #[arg(long)]
        voice: bool,

        /// Replay a saved YouTube search response instead of the sample catalog
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        catalog: Option<PathBuf>,

        #[command(flatten)]
        options: DetectOptions,
    },

    /// Pick a random mood and print its playlist
    Shuffle {
        /// Replay a saved YouTube search response instead of the sample catalog
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        catalog: Option<PathBuf>,
    },

    /// Manage favorite tracks
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Find upcoming concerts
    ///
    /// Both filters are case-insensitive and match part of the name.
    Concerts {
        /// Artist name, or part of it
        #[arg(long)]
        artist: Option<String>,

        /// City name, or part of it ("All Cities" for any)
        #[arg(long)]
        city: Option<String>,

        /// Print the concerts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// Usage: moodify completion bash > ~/.local/share/bash-completion/completions/moodify
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate enhanced bash completion with mood and favorite completion
    CompletionEnhanced,

    /// List favorite ids for completion (hidden command)
    #[command(hide = true)]
    CompleteFavorites,
}

/// Favorites management actions
#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// Show all favorite tracks
    List,

    /// Add a track from a mood's sample playlist
    Add {
        mood: MoodCategory,
        /// 1-based position in the playlist
        position: usize,
    },

    /// Remove a favorite by id
    Remove {
        id: String,
    },

    /// Remove all favorites
    Clear,
}
