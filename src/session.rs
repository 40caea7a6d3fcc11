//! # Mood Session
//!
//! Caller-side orchestration around the classifier: keeps the selected mood
//! and current playlist, turns detected moods into catalog queries, and falls
//! back to the sample playlists when the catalog fails.
//!
//! ## Search flow
//!
//! 1. Classify the text (strict for [`MoodSession::search`], lenient for
//!    [`MoodSession::voice_search`]).
//! 2. Mood found: select it and fetch its canonical query.
//! 3. No mood: send the raw text to the provider instead.
//!
//! State is owned by the session; nothing here is global.

use crate::classifier::{DetectionPreset, MoodClassifier};
use crate::favorites::FavoritesStore;
use crate::media::{sample_playlist, MediaItem};
use crate::mood::MoodCategory;
use crate::provider::{PlaylistProvider, SearchError};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Playlist state for one user, driven by mood selection and text search.
pub struct MoodSession<P> {
    provider: P,
    strict: MoodClassifier,
    lenient: MoodClassifier,
    favorites: Option<FavoritesStore>,
    selected_mood: MoodCategory,
    playlist: Vec<MediaItem>,
    status: Option<String>,
    last_query: Option<String>,
    detected_mood: Option<MoodCategory>,
}

impl<P: PlaylistProvider> MoodSession<P> {
    /// Creates a session with the happy mood selected and an empty playlist.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            strict: MoodClassifier::from_preset(DetectionPreset::Strict),
            lenient: MoodClassifier::from_preset(DetectionPreset::Lenient),
            favorites: None,
            selected_mood: MoodCategory::Happy,
            playlist: Vec::new(),
            status: None,
            last_query: None,
            detected_mood: None,
        }
    }

    /// Replaces the classifier used by [`MoodSession::search`].
    #[must_use]
    pub fn with_classifier(mut self, classifier: MoodClassifier) -> Self {
        self.strict = classifier;
        self
    }

    /// Replaces the classifier used by [`MoodSession::voice_search`].
    #[must_use]
    pub fn with_voice_classifier(mut self, classifier: MoodClassifier) -> Self {
        self.lenient = classifier;
        self
    }

    /// Playlists fetched from now on get their favorite flags from `store`.
    #[must_use]
    pub fn with_favorites(mut self, store: FavoritesStore) -> Self {
        store.mark(&mut self.playlist);
        self.favorites = Some(store);
        self
    }

    #[must_use]
    pub fn selected_mood(&self) -> MoodCategory {
        self.selected_mood
    }

    #[must_use]
    pub fn playlist(&self) -> &[MediaItem] {
        &self.playlist
    }

    /// Last user-facing status line, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    #[must_use]
    pub fn detected_mood(&self) -> Option<MoodCategory> {
        self.detected_mood
    }

    pub fn favorites(&self) -> Option<&FavoritesStore> {
        self.favorites.as_ref()
    }

    pub fn favorites_mut(&mut self) -> Option<&mut FavoritesStore> {
        self.favorites.as_mut()
    }

    /// Switches to `mood` and loads its playlist.
    pub fn select_mood(&mut self, mood: MoodCategory) {
        info!("Selected mood: {mood}");
        self.selected_mood = mood;
        self.status = None;
        self.fetch_mood(mood);
    }

    /// Loads the playlist for `mood` without changing the selection state
    /// around voice feedback.
    ///
    /// On failure the mood's sample playlist is shown and the status line
    /// explains why.
    pub fn fetch_mood(&mut self, mood: MoodCategory) {
        let query = mood.search_query();
        debug!("Fetching songs for {mood} with query '{query}'");

        match self.provider.search(query) {
            Ok(songs) => {
                info!("Found {} songs for {mood}", songs.len());
                self.status = if self.detected_mood == Some(mood) {
                    Some(format!("Voice search: Found {} {} songs", songs.len(), mood.label()))
                } else {
                    None
                };
                self.set_playlist(songs);
            }
            Err(e) => {
                warn!("Error fetching songs for {mood}: {e}");
                self.status = Some(fallback_message(&e).to_string());
                self.set_playlist(sample_playlist(mood));
            }
        }
    }

    /// Text search from the main search bar (strict detection).
    pub fn search(&mut self, text: &str) {
        let mood = self.strict.classify(text);
        self.run_search(text, mood);
    }

    /// Text search from the voice screen (lenient detection).
    pub fn voice_search(&mut self, text: &str) {
        let mood = self.lenient.classify(text);
        self.run_search(text, mood);
    }

    fn run_search(&mut self, text: &str, mood: Option<MoodCategory>) {
        info!("Searching for: {text}");
        self.last_query = Some(text.to_string());

        if let Some(mood) = mood {
            info!("Detected mood from search: {mood}");
            self.detected_mood = Some(mood);
            self.selected_mood = mood;
            self.status = Some(format!("Voice detected: {} mood", mood.label()));
            self.fetch_mood(mood);
            return;
        }

        self.detected_mood = None;
        match self.provider.search(text) {
            Ok(songs) => {
                info!("Search found {} songs", songs.len());
                self.status = Some(format!("Found {} songs for '{text}'", songs.len()));
                self.set_playlist(songs);
            }
            Err(e) => {
                warn!("Search for '{text}' failed: {e}");
                self.status = Some(format!(
                    "Voice search failed. Showing {} mood playlist.",
                    self.selected_mood.label()
                ));
            }
        }
    }

    /// Feedback line while a search result is on screen.
    #[must_use]
    pub fn voice_feedback(&self) -> Option<String> {
        if let Some(mood) = self.detected_mood {
            return Some(format!("Voice detected: {}", mood.label()));
        }
        self.last_query
            .as_ref()
            .map(|query| format!("Searching: {query}"))
    }

    #[must_use]
    pub fn is_search_active(&self) -> bool {
        self.detected_mood.is_some() || self.last_query.is_some()
    }

    /// Drops search feedback once it has been shown.
    pub fn clear_voice_feedback(&mut self) {
        self.detected_mood = None;
        self.last_query = None;
        if self
            .status
            .as_deref()
            .is_some_and(|s| s.contains("Voice detected") || s.contains("Found"))
        {
            self.status = None;
        }
    }

    pub fn shuffle_playlist<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("Shuffling current playlist");
        self.playlist.shuffle(rng);
    }

    /// Selects a random mood and loads it. Returns the chosen mood.
    pub fn shuffle_to_random_mood<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MoodCategory {
        let mood = *MoodCategory::ALL.choose(rng).unwrap_or(&MoodCategory::Happy);
        debug!("Shuffling to random mood: {mood}");
        self.select_mood(mood);
        mood
    }

    /// Toggles the favorite flag of the playlist entry at `index`.
    ///
    /// Returns `None` when no favorites store is attached or the index is
    /// out of range.
    pub fn toggle_favorite(&mut self, index: usize) -> Option<anyhow::Result<bool>> {
        let store = self.favorites.as_mut()?;
        let item = self.playlist.get_mut(index)?;
        let result = store.toggle(item);
        if let Ok(now_favorite) = &result {
            item.is_favorite = *now_favorite;
        }
        Some(result)
    }

    fn set_playlist(&mut self, mut songs: Vec<MediaItem>) {
        if let Some(store) = &self.favorites {
            store.mark(&mut songs);
        }
        self.playlist = songs;
    }
}

/// Status shown when a mood playlist falls back to samples.
#[must_use]
pub fn fallback_message(error: &SearchError) -> &'static str {
    match error {
        SearchError::Unauthorized => "YouTube API key issue. Using sample songs.",
        SearchError::QuotaExceeded => "API quota exceeded. Using sample songs.",
        SearchError::NoData => "No songs found. Using sample songs.",
        _ => "Network error. Using sample songs.",
    }
}
