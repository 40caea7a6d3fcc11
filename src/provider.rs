//! # Playlist Providers
//!
//! A [`PlaylistProvider`] turns a search string into an ordered list of
//! [`MediaItem`]s. Mood searches pass [`MoodCategory::search_query`]; free
//! text searches pass the user's words through unchanged.
//!
//! Two offline providers are included:
//!
//! - [`SampleCatalog`] - searches the built-in sample playlists
//! - [`SearchResponseFile`] - replays a saved YouTube Data API search response
//!
//! Calls block. Timeouts and retries are up to the implementation.

use crate::classifier::{DetectionPreset, MoodClassifier};
use crate::media::{sample_playlist, MediaItem};
use crate::mood::MoodCategory;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Maximum number of items a provider hands back for one search.
pub const MAX_PLAYLIST_ITEMS: usize = 20;

/// Failure modes of a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Invalid search query")]
    InvalidQuery,
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("API quota exceeded")]
    QuotaExceeded,
    #[error("No data received")]
    NoData,
    #[error("Failed to decode response: {0}")]
    DecodingError(String),
    #[error("Network connection error: {0}")]
    NetworkError(String),
}

/// Source of playlists for a search string.
pub trait PlaylistProvider {
    fn search(&self, query: &str) -> Result<Vec<MediaItem>, SearchError>;
}

impl<P: PlaylistProvider + ?Sized> PlaylistProvider for &P {
    fn search(&self, query: &str) -> Result<Vec<MediaItem>, SearchError> {
        (**self).search(query)
    }
}

impl<P: PlaylistProvider + ?Sized> PlaylistProvider for Box<P> {
    fn search(&self, query: &str) -> Result<Vec<MediaItem>, SearchError> {
        (**self).search(query)
    }
}

/// Offline provider backed by the built-in sample playlists.
#[derive(Debug, Clone, Default)]
pub struct SampleCatalog {
    classifier: MoodClassifier,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self {
            classifier: MoodClassifier::from_preset(DetectionPreset::Strict),
        }
    }

    fn mood_for_query(&self, query: &str) -> Option<MoodCategory> {
        MoodCategory::ALL
            .into_iter()
            .find(|mood| mood.search_query().eq_ignore_ascii_case(query))
            .or_else(|| self.classifier.classify(query))
    }
}

impl PlaylistProvider for SampleCatalog {
    fn search(&self, query: &str) -> Result<Vec<MediaItem>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::InvalidQuery);
        }

        if let Some(mood) = self.mood_for_query(query) {
            debug!("Sample catalog serving {mood} playlist for '{query}'");
            return Ok(sample_playlist(mood));
        }

        let words: Vec<String> = query
            .split_whitespace()
            .filter(|word| word.chars().count() >= 3)
            .map(str::to_lowercase)
            .collect();

        let found: Vec<MediaItem> = MoodCategory::ALL
            .into_iter()
            .flat_map(sample_playlist)
            .filter(|item| {
                let title = item.title.to_lowercase();
                let artist = item.artist.to_lowercase();
                words.iter().any(|w| title.contains(w.as_str()) || artist.contains(w.as_str()))
            })
            .take(MAX_PLAYLIST_ITEMS)
            .collect();

        if found.is_empty() {
            debug!("Sample catalog has nothing for '{query}'");
            return Err(SearchError::NoData);
        }
        Ok(found)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchResponseItem>,
}

#[derive(Debug, Deserialize)]
struct SearchResponseItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    default: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Provider that answers every query with a saved YouTube search response.
///
/// Useful for running the full search flow without network access. The file
/// is re-read on each search.
#[derive(Debug, Clone)]
pub struct SearchResponseFile {
    path: PathBuf,
}

impl SearchResponseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes a YouTube Data API `search.list` response body.
    pub fn parse(body: &str) -> Result<Vec<MediaItem>, SearchError> {
        let response: SearchResponse =
            serde_json::from_str(body).map_err(|e| SearchError::DecodingError(e.to_string()))?;

        if response.items.is_empty() {
            return Err(SearchError::NoData);
        }

        Ok(response
            .items
            .into_iter()
            .take(MAX_PLAYLIST_ITEMS)
            .map(|item| {
                let video_url = format!("https://www.youtube.com/watch?v={}", item.id.video_id);
                MediaItem::new(
                    item.id.video_id,
                    item.snippet.title,
                    item.snippet.channel_title,
                    item.snippet.thumbnails.default.url,
                    video_url,
                )
            })
            .collect())
    }
}

impl PlaylistProvider for SearchResponseFile {
    fn search(&self, query: &str) -> Result<Vec<MediaItem>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery);
        }
        info!("Replaying saved search response {} for '{query}'", self.path.display());
        let body = fs::read_to_string(&self.path)
            .map_err(|e| SearchError::NetworkError(format!("{}: {e}", self.path.display())))?;
        Self::parse(&body)
    }
}
